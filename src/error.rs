use thiserror::Error;

/// Errors a [`CoordinateSystem`](crate::CoordinateSystem) implementation may
/// surface.
///
/// The built-in systems are total over finite inputs and never return these;
/// inputs outside a projection's valid domain propagate IEEE-754 specials
/// (NaN/Inf) instead of failing.
#[derive(Error, Debug)]
pub enum ProjError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("transform failed: {0}")]
    TransformFailed(String),
}
