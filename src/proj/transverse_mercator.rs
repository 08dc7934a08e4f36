//! Transverse Mercator projection, the basis of UTM and Gauss-Krüger zones.
//!
//! Meridian arc by a four-term series in the eccentricity powers, footpoint
//! latitude by the closed-form third-flattening series, and a 6th-order
//! Taylor correction in the normalized easting/longitude difference. Valid
//! within a few degrees of the central meridian; no runtime domain checks.

use crate::error::ProjError;

use super::common::{footpoint_latitude, meridian_arc, rectifying_radius};
use super::ellipsoid::Ellipsoid;
use super::geographic::{geodetic_to_xyz, prime_vertical_radius, xyz_to_geodetic};
use super::CoordinateSystem;

pub struct TransverseMercator {
    lon0: f64,
    lat0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl TransverseMercator {
    /// General constructor. `lon0`/`lat0` are the origin in decimal degrees.
    pub fn new(lon0: f64, lat0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0: lon0.to_radians(),
            lat0: lat0.to_radians(),
            k0,
            false_easting,
            false_northing,
        }
    }

    /// UTM zone preset: central meridian at zone * 6 - 183, scale 0.9996,
    /// false easting 500 km, false northing 10 000 km on the southern
    /// hemisphere.
    pub fn utm_zone(zone: u8, north: bool) -> Self {
        let false_northing = if north { 0.0 } else { 10_000_000.0 };
        Self::new(
            f64::from(zone) * 6.0 - 183.0,
            0.0,
            0.9996,
            500_000.0,
            false_northing,
        )
    }

    /// Gauss-Krüger zone preset: central meridian at zone * 3, scale 1,
    /// false easting zone * 1 000 000 + 500 000.
    pub fn gauss_kruger(zone: u8) -> Self {
        Self::new(
            f64::from(zone) * 3.0,
            0.0,
            1.0,
            f64::from(zone) * 1_000_000.0 + 500_000.0,
            0.0,
        )
    }
}

impl CoordinateSystem for TransverseMercator {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let ell = ellipsoid;
        let east = east - self.false_easting;
        let north = north - self.false_northing;

        // Footpoint latitude of the meridian arc at the offset northing.
        let mi = meridian_arc(ell, self.lat0) + north / self.k0;
        let mu = mi / rectifying_radius(ell);
        let phi1 = footpoint_latitude(ell, mu);

        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = sin1 / cos1;
        let t = tan1 * tan1;
        let c = ell.n2 * cos1 * cos1;
        let n1 = prime_vertical_radius(ell, phi1);
        // Meridional radius of curvature at the footpoint.
        let r1 = ell.a * (1.0 - ell.e2) / (1.0 - ell.e2 * sin1 * sin1).powf(1.5);
        let d = east / (n1 * self.k0);
        let d2 = d * d;

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t + 10.0 * c - 4.0 * c * c - 9.0 * ell.n2) * d2 * d2 / 24.0
                    + (61.0 + 90.0 * t + 298.0 * c + 45.0 * t * t - 252.0 * ell.n2 - 3.0 * c * c)
                        * d2
                        * d2
                        * d2
                        / 720.0);
        let lon = self.lon0
            + (d - (1.0 + 2.0 * t + c) * d * d2 / 6.0
                + (5.0 - 2.0 * c + 28.0 * t - 3.0 * c * c + 8.0 * ell.n2 + 24.0 * t * t)
                    * d
                    * d2
                    * d2
                    / 120.0)
                / cos1;

        Ok(geodetic_to_xyz(ell, lon, lat, h))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let ell = ellipsoid;
        let (lon, lat, h) = xyz_to_geodetic(ell, x, y, z);

        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan_lat = sin_lat / cos_lat;
        let t = tan_lat * tan_lat;
        let c = ell.n2 * cos_lat * cos_lat;
        let n = prime_vertical_radius(ell, lat);
        let a_ = (lon - self.lon0) * cos_lat;
        let a2 = a_ * a_;

        let east = self.k0
            * n
            * (a_ + (1.0 - t + c) * a_ * a2 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ell.n2) * a_ * a2 * a2 / 120.0)
            + self.false_easting;
        let north = self.k0
            * (meridian_arc(ell, lat) - meridian_arc(ell, self.lat0)
                + n * tan_lat
                    * (a2 / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a2 * a2 / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ell.n2)
                            * a2
                            * a2
                            * a2
                            / 720.0))
            + self.false_northing;

        Ok((east, north, h))
    }
}
