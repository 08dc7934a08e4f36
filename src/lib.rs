//! Conversions between geocentric Cartesian coordinates (X, Y, Z in metres,
//! origin at the ellipsoid centre) and geodetic or projected coordinates.
//!
//! Supported systems: geographic (lon/lat/height), Transverse Mercator (with
//! UTM and Gauss-Krüger presets), Mercator, Web Mercator, Lambert Conformal
//! Conic (1SP and 2SP), Albers Equal-Area Conic and Equidistant Conic. Every
//! conversion is parameterized by a reference [`Ellipsoid`]; [`WGS84`] is used
//! when the caller supplies none.
//!
//! All operations are pure functions of their inputs: no shared state, no
//! I/O, safe to call from any number of threads.

pub mod error;
pub mod proj;

pub use error::ProjError;
pub use proj::ellipsoid::{Ellipsoid, WGS84};
pub use proj::geographic::Geographic;
pub use proj::system::{System, Transform};
pub use proj::CoordinateSystem;
