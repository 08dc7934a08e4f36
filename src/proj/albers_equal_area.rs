//! Albers Equal-Area Conic projection.
//!
//! Built on the authalic parameter q(phi) and the parallel radius m(phi).
//! Latitude recovery uses five fixed additive Newton-style corrections, in
//! contrast with the multiplicative scheme of the conformal family.
//! Undefined on a perfect sphere (q carries a 1/(2e) term).

use crate::error::ProjError;

use super::common::{msfn, qsfn};
use super::ellipsoid::Ellipsoid;
use super::geographic::{geodetic_to_xyz, xyz_to_geodetic};
use super::CoordinateSystem;

pub struct AlbersEqualArea {
    lon0: f64,
    lat0: f64,
    lat1: f64,
    lat2: f64,
    false_easting: f64,
    false_northing: f64,
}

impl AlbersEqualArea {
    /// Origin and standard parallels in decimal degrees.
    pub fn new(
        lon0: f64,
        lat0: f64,
        lat1: f64,
        lat2: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            lon0: lon0.to_radians(),
            lat0: lat0.to_radians(),
            lat1: lat1.to_radians(),
            lat2: lat2.to_radians(),
            false_easting,
            false_northing,
        }
    }

    /// Cone constant n, the constant C and the origin radius rho0.
    fn constants(&self, ell: &Ellipsoid) -> (f64, f64, f64) {
        let e = ell.eccentricity();
        let m1 = msfn(self.lat1, ell.e2);
        let q1 = qsfn(self.lat1, e);
        let n = if (self.lat1 - self.lat2).abs() > 1e-10 {
            let m2 = msfn(self.lat2, ell.e2);
            let q2 = qsfn(self.lat2, e);
            (m1 * m1 - m2 * m2) / (q2 - q1)
        } else {
            self.lat1.sin()
        };
        let c = m1 * m1 + n * q1;
        let rho0 = ell.a * (c - n * qsfn(self.lat0, e)).sqrt() / n;
        (n, c, rho0)
    }
}

impl CoordinateSystem for AlbersEqualArea {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let e2 = ellipsoid.e2;
        let (n, c, rho0) = self.constants(ellipsoid);
        let east = east - self.false_easting;
        let north = north - self.false_northing;

        let rho_i = (east * east + (rho0 - north) * (rho0 - north)).sqrt();
        let qi = (c - rho_i * rho_i * n * n / (ellipsoid.a * ellipsoid.a)) / n;

        // Five fixed additive corrections, seeded with the spherical estimate.
        let mut lat = (qi / 2.0).asin();
        for _ in 0..5 {
            let s = lat.sin();
            let es = e * s;
            let om = 1.0 - e2 * s * s;
            lat += om * om / (2.0 * lat.cos())
                * (qi / (1.0 - e2) - s / om + ((1.0 - es) / (1.0 + es)).ln() / (2.0 * e));
        }

        let theta = (east / (rho0 - north)).atan();
        let lon = self.lon0 + theta / n;
        Ok(geodetic_to_xyz(ellipsoid, lon, lat, h))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let (n, c, rho0) = self.constants(ellipsoid);
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);

        let rho = ellipsoid.a * (c - n * qsfn(lat, e)).sqrt() / n;
        let theta = n * (lon - self.lon0);
        let east = self.false_easting + rho * theta.sin();
        let north = self.false_northing + rho0 - rho * theta.cos();
        Ok((east, north, h))
    }
}
