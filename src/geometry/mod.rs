pub mod bezier;
pub mod curve;

pub use bezier::{Bezier, Handle, HandleSide, Vertex, VertexId};
pub use curve::{BezierSpline, Curve, CurveDomain};
