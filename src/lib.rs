//! Bezier curve construction and curvature-adaptive flattening.
//!
//! A [`Bezier`](geometry::Bezier) is built from endpoints, control midpoints
//! and polar tangent handles, then flattened into a [`Polygon`](tessellation::Polygon)
//! of points in curve order.

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{PolybezError, Result};
pub use geometry::Bezier;
pub use tessellation::{FlattenParams, Polygon};
