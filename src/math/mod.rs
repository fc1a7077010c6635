pub mod polar;
pub mod polygon_2d;
pub mod polynomial;

pub use polar::{polar_to_cartesian, zero_small};
pub use polynomial::{BezierPolynomial, PolynomialOrder};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative threshold below which polynomial coefficients are snapped to zero.
pub const POLY_EPSILON: f64 = 1e-12;
