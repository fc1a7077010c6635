use thiserror::Error;

/// Top-level error type for the polybez crate.
#[derive(Debug, Error)]
pub enum PolybezError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to polynomial and spline construction or evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid polynomial order: {count} control values given, expected 2..=5")]
    InvalidOrder { count: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to building and normalizing a Bezier curve.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to flattening.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid flattening parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolybezError`].
pub type Result<T> = std::result::Result<T, PolybezError>;
