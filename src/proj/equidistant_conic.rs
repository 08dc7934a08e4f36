//! Equidistant Conic projection.
//!
//! Shares the meridian arc series with Transverse Mercator and the parallel
//! radius m(phi) with the other conics. The footpoint latitude comes from the
//! closed-form series, with no refinement loop; the conformal and equal-area
//! families iterate instead, and that asymmetry is kept as inherited.

use crate::error::ProjError;

use super::common::{footpoint_latitude, meridian_arc, msfn, rectifying_radius};
use super::ellipsoid::Ellipsoid;
use super::geographic::{geodetic_to_xyz, xyz_to_geodetic};
use super::CoordinateSystem;

pub struct EquidistantConic {
    lon0: f64,
    lat0: f64,
    lat1: f64,
    lat2: f64,
    false_easting: f64,
    false_northing: f64,
}

impl EquidistantConic {
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

    /// Cone constant n, the constant G and the origin radius rho0.
    /// rho(phi) = a * G - M(phi).
    fn constants(&self, ell: &Ellipsoid) -> (f64, f64, f64) {
        let m1 = msfn(self.lat1, ell.e2);
        let big_m1 = meridian_arc(ell, self.lat1);
        let n = if (self.lat1 - self.lat2).abs() > 1e-10 {
            let m2 = msfn(self.lat2, ell.e2);
            let big_m2 = meridian_arc(ell, self.lat2);
            ell.a * (m1 - m2) / (big_m2 - big_m1)
        } else {
            self.lat1.sin()
        };
        let g = m1 / n + big_m1 / ell.a;
        let rho0 = ell.a * g - meridian_arc(ell, self.lat0);
        (n, g, rho0)
    }
}

impl CoordinateSystem for EquidistantConic {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let (n, g, rho0) = self.constants(ellipsoid);
        let east = east - self.false_easting;
        let north = north - self.false_northing;

        let mut rho_i = (east * east + (rho0 - north) * (rho0 - north)).sqrt();
        if n < 0.0 {
            rho_i = -rho_i;
        }
        let mi = ellipsoid.a * g - rho_i;
        let mu = mi / rectifying_radius(ellipsoid);
        let lat = footpoint_latitude(ellipsoid, mu);

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
        let (n, g, rho0) = self.constants(ellipsoid);
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);

        let rho = ellipsoid.a * g - meridian_arc(ellipsoid, lat);
        let theta = n * (lon - self.lon0);
        let east = self.false_easting + rho * theta.sin();
        let north = self.false_northing + rho0 - rho * theta.cos();
        Ok((east, north, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use crate::proj::geographic::Geographic;
    use approx::assert_relative_eq;

    fn us_conic() -> EquidistantConic {
        EquidistantConic::new(-96.0, 39.0, 33.0, 45.0, 0.0, 0.0)
    }

    #[test]
    fn test_origin() {
        let (x, y, z) = Geographic.to_xyz(-96.0, 39.0, 0.0, &WGS84).unwrap();
        let (e, n, _) = us_conic().from_xyz(x, y, z, &WGS84).unwrap();
        assert_relative_eq!(e, 0.0, epsilon = 1e-3);
        assert_relative_eq!(n, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_projected_roundtrip() {
        let proj = us_conic();
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (500_000.0, 500_000.0),
            (-800_000.0, -300_000.0),
            (1_500_000.0, 200_000.0),
            (-1_200_000.0, 700_000.0),
        ];
        for &(e, n) in cases {
            let (x, y, z) = proj.to_xyz(e, n, 75.0, &WGS84).unwrap();
            let (e2, n2, h2) = proj.from_xyz(x, y, z, &WGS84).unwrap();
            assert_relative_eq!(e2, e, epsilon = 1e-3);
            assert_relative_eq!(n2, n, epsilon = 1e-3);
            assert_relative_eq!(h2, 75.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_standard_parallels_true_scale() {
        // Along a standard parallel the projection preserves distance from
        // the cone apex, so points on lat1 keep rho constant.
        let proj = us_conic();
        let (x1, y1, z1) = Geographic.to_xyz(-96.0, 33.0, 0.0, &WGS84).unwrap();
        let (x2, y2, z2) = Geographic.to_xyz(-90.0, 33.0, 0.0, &WGS84).unwrap();
        let (e1, n1, _) = proj.from_xyz(x1, y1, z1, &WGS84).unwrap();
        let (e2, n2, _) = proj.from_xyz(x2, y2, z2, &WGS84).unwrap();
        let (_, _, rho0) = proj.constants(&WGS84);
        let r1 = (e1 * e1 + (rho0 - n1) * (rho0 - n1)).sqrt();
        let r2 = (e2 * e2 + (rho0 - n2) * (rho0 - n2)).sqrt();
        assert_relative_eq!(r1, r2, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_parallels() {
        let proj = EquidistantConic::new(-96.0, 39.0, 41.0, 41.0, 0.0, 0.0);
        for &(e, n) in &[(0.0, 0.0), (400_000.0, 300_000.0), (-500_000.0, -200_000.0)] {
            let (x, y, z) = proj.to_xyz(e, n, 0.0, &WGS84).unwrap();
            assert!(x.is_finite() && y.is_finite() && z.is_finite());
            let (e2, n2, _) = proj.from_xyz(x, y, z, &WGS84).unwrap();
            assert_relative_eq!(e2, e, epsilon = 1e-3);
            assert_relative_eq!(n2, n, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_southern_parallels() {
        let proj = EquidistantConic::new(135.0, -25.0, -18.0, -32.0, 0.0, 0.0);
        for &(e, n) in &[(0.0, 0.0), (600_000.0, -350_000.0), (-700_000.0, 400_000.0)] {
            let (x, y, z) = proj.to_xyz(e, n, 0.0, &WGS84).unwrap();
            let (e2, n2, _) = proj.from_xyz(x, y, z, &WGS84).unwrap();
            assert_relative_eq!(e2, e, epsilon = 1e-3);
            assert_relative_eq!(n2, n, epsilon = 1e-3);
        }
    }
}
