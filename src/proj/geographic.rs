//! Geographic (longitude, latitude, height) system and the geodetic to
//! geocentric anchor conversion every projection routes through.

use crate::error::ProjError;

use super::ellipsoid::Ellipsoid;
use super::CoordinateSystem;

/// Prime-vertical radius of curvature N(phi).
pub(crate) fn prime_vertical_radius(ell: &Ellipsoid, phi: f64) -> f64 {
    let s = phi.sin();
    ell.a / (1.0 - ell.e2 * s * s).sqrt()
}

/// Geodetic (radians, metres) to geocentric metres. Closed form.
pub(crate) fn geodetic_to_xyz(ell: &Ellipsoid, lon: f64, lat: f64, h: f64) -> (f64, f64, f64) {
    let n = prime_vertical_radius(ell, lat);
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let x = (n + h) * cos_lat * cos_lon;
    let y = (n + h) * cos_lat * sin_lon;
    let z = (n * (1.0 - ell.e2) + h) * sin_lat;
    (x, y, z)
}

/// Geocentric metres to geodetic (radians, metres).
///
/// Single-pass parametric-latitude (Bowring) method: one auxiliary angle, one
/// closed-form latitude expression, no refinement loop. Accurate to well under
/// 1e-9 rad for heights within the atmosphere; degrades asymptotically where
/// the planar distance vanishes (the poles).
pub(crate) fn xyz_to_geodetic(ell: &Ellipsoid, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let p = (x * x + y * y).sqrt();
    let t = (z * ell.a).atan2(p * ell.b);
    let (sin_t, cos_t) = t.sin_cos();
    let lat = ((z + ell.e2 * ell.a * ell.a / ell.b * sin_t.powi(3))
        / (p - ell.e2 * ell.a * cos_t.powi(3)))
    .atan();
    let h = p / lat.cos() - prime_vertical_radius(ell, lat);
    (y.atan2(x), lat, h)
}

/// The plain geographic system: decimal degrees and metres at the API
/// boundary, no projection. Longitude quadrant is recovered with the
/// two-argument arctangent, so X = 0 is handled like any other input.
pub struct Geographic;

impl CoordinateSystem for Geographic {
    fn to_xyz(
        &self,
        lon: f64,
        lat: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        Ok(geodetic_to_xyz(
            ellipsoid,
            lon.to_radians(),
            lat.to_radians(),
            h,
        ))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);
        Ok((lon.to_degrees(), lat.to_degrees(), h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{Ellipsoid, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_equator_prime_meridian() {
        // (0°, 0°, 0) sits on the semi-major axis.
        let (x, y, z) = Geographic.to_xyz(0.0, 0.0, 0.0, &WGS84).unwrap();
        assert_relative_eq!(x, 6_378_137.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quadrants() {
        for &(lon, lat) in &[
            (90.0, 10.0),
            (-90.0, 10.0),
            (179.0, -45.0),
            (-179.0, -45.0),
            (0.0, 89.0),
        ] {
            let (x, y, z) = Geographic.to_xyz(lon, lat, 0.0, &WGS84).unwrap();
            let (lon2, lat2, h2) = Geographic.from_xyz(x, y, z, &WGS84).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-7);
            assert_relative_eq!(h2, 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_lon_90_lies_on_y_axis() {
        // X = 0 exercises the atan2 quadrant recovery.
        let (x, y, _) = Geographic.to_xyz(90.0, 0.0, 0.0, &WGS84).unwrap();
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 6_378_137.0, epsilon = 1e-6);
        let (lon, _, _) = Geographic.from_xyz(0.0, 6_378_137.0, 0.0, &WGS84).unwrap();
        assert_relative_eq!(lon, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roundtrip_grid() {
        // Round trip within 1e-7 degrees / 1 mm across the working band.
        for lon in [-180.0_f64, -120.0, -60.0, 0.0, 60.0, 120.0, 180.0] {
            for lat in [-85.0_f64, -60.0, -30.0, 0.0, 30.0, 60.0, 85.0] {
                for h in [-1000.0_f64, 0.0, 2000.0, 9000.0] {
                    let (x, y, z) = Geographic.to_xyz(lon, lat, h, &WGS84).unwrap();
                    let (lon2, lat2, h2) = Geographic.from_xyz(x, y, z, &WGS84).unwrap();
                    assert_relative_eq!(lon2, lon, epsilon = 1e-7);
                    assert_relative_eq!(lat2, lat, epsilon = 1e-7);
                    assert_relative_eq!(h2, h, epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_low_flattening_ellipsoids() {
        for f in [0.0_f64, 0.001, 1.0 / 298.257_223_563, 0.009] {
            let ell = Ellipsoid::new(6_378_137.0, f);
            for &(lon, lat, h) in &[(12.5, 41.9, 100.0), (-70.66, -33.45, 520.0)] {
                let (x, y, z) = Geographic.to_xyz(lon, lat, h, &ell).unwrap();
                let (lon2, lat2, h2) = Geographic.from_xyz(x, y, z, &ell).unwrap();
                assert_relative_eq!(lon2, lon, epsilon = 1e-7);
                assert_relative_eq!(lat2, lat, epsilon = 1e-7);
                assert_relative_eq!(h2, h, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_height_along_normal() {
        // Adding height moves along the ellipsoid normal: at the equator the
        // geocentric distance grows by exactly h.
        let (x0, _, _) = Geographic.to_xyz(0.0, 0.0, 0.0, &WGS84).unwrap();
        let (x1, _, _) = Geographic.to_xyz(0.0, 0.0, 500.0, &WGS84).unwrap();
        assert_relative_eq!(x1 - x0, 500.0, epsilon = 1e-6);
    }
}
