pub mod albers_equal_area;
pub mod common;
pub mod ellipsoid;
pub mod equidistant_conic;
pub mod geographic;
pub mod lambert_conformal;
pub mod mercator;
pub mod system;
pub mod transverse_mercator;

use crate::error::ProjError;
use self::ellipsoid::Ellipsoid;

/// A coordinate system that can move its native triple to and from geocentric
/// Cartesian metres.
///
/// For the geographic system the triple is (longitude°, latitude°, height m);
/// for projected systems it is (easting m, northing m, height m). The
/// reference ellipsoid is a per-call input, so one projection value serves any
/// ellipsoid.
pub trait CoordinateSystem: Send + Sync {
    /// System-native (a, b, c) to geocentric (x, y, z) metres.
    fn to_xyz(
        &self,
        a: f64,
        b: f64,
        c: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError>;

    /// Geocentric (x, y, z) metres to system-native (a, b, c).
    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError>;

    /// Batch conversion to XYZ (default: loop, override for SIMD).
    fn to_xyz_batch(
        &self,
        coords: &mut [(f64, f64, f64)],
        ellipsoid: &Ellipsoid,
    ) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.to_xyz(c.0, c.1, c.2, ellipsoid)?;
        }
        Ok(())
    }

    /// Batch conversion from XYZ.
    fn from_xyz_batch(
        &self,
        coords: &mut [(f64, f64, f64)],
        ellipsoid: &Ellipsoid,
    ) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.from_xyz(c.0, c.1, c.2, ellipsoid)?;
        }
        Ok(())
    }
}
