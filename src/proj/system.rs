//! Uniform dispatch over coordinate systems: default-ellipsoid substitution,
//! the geographic fallback, and system-to-system transforms routed through
//! geocentric XYZ.

use crate::error::ProjError;

use super::ellipsoid::{Ellipsoid, WGS84};
use super::geographic::Geographic;
use super::mercator::WebMercator;
use super::transverse_mercator::TransverseMercator;
use super::CoordinateSystem;

/// A coordinate system endpoint.
///
/// `Geographic` is the "no projection configured" variant: both operations
/// degrade to the plain geographic/geocentric transform. The ellipsoid is
/// optional per call; `None` selects WGS84.
pub enum System {
    /// Plain lon/lat/height in decimal degrees and metres.
    Geographic,
    /// A projected system in metres.
    Projected(Box<dyn CoordinateSystem>),
}

impl System {
    pub fn projected(projection: impl CoordinateSystem + 'static) -> Self {
        System::Projected(Box::new(projection))
    }

    pub fn utm(zone: u8, north: bool) -> Self {
        Self::projected(TransverseMercator::utm_zone(zone, north))
    }

    pub fn gauss_kruger(zone: u8) -> Self {
        Self::projected(TransverseMercator::gauss_kruger(zone))
    }

    pub fn web_mercator() -> Self {
        Self::projected(WebMercator)
    }

    /// System-native (a, b, c) to geocentric metres. `None` means WGS84.
    pub fn to_xyz(
        &self,
        a: f64,
        b: f64,
        c: f64,
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<(f64, f64, f64), ProjError> {
        let ell = ellipsoid.unwrap_or(&WGS84);
        match self {
            System::Geographic => Geographic.to_xyz(a, b, c, ell),
            System::Projected(proj) => proj.to_xyz(a, b, c, ell),
        }
    }

    /// Geocentric metres to system-native (a, b, c). `None` means WGS84.
    pub fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<(f64, f64, f64), ProjError> {
        let ell = ellipsoid.unwrap_or(&WGS84);
        match self {
            System::Geographic => Geographic.from_xyz(x, y, z, ell),
            System::Projected(proj) => proj.from_xyz(x, y, z, ell),
        }
    }
}

/// Converts coordinate triples between two systems by routing through
/// geocentric XYZ.
pub struct Transform {
    pub from: System,
    pub to: System,
}

impl Transform {
    pub fn new(from: System, to: System) -> Self {
        Self { from, to }
    }

    /// Convert one triple. Both legs share the same (optional) ellipsoid.
    pub fn convert(
        &self,
        a: f64,
        b: f64,
        c: f64,
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<(f64, f64, f64), ProjError> {
        let (x, y, z) = self.from.to_xyz(a, b, c, ellipsoid)?;
        self.to.from_xyz(x, y, z, ellipsoid)
    }

    /// Convert a slice of triples in place.
    pub fn convert_batch(
        &self,
        coords: &mut [(f64, f64, f64)],
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.convert(c.0, c.1, c.2, ellipsoid)?;
        }
        Ok(())
    }
}
