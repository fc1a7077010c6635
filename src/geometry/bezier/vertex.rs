use crate::math::{polar_to_cartesian, Point2};

/// A tangent handle in polar form, relative to its endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Direction in radians, counter-clockwise from +X.
    pub angle: f64,
    /// Distance from the endpoint. Always positive.
    pub radius: f64,
}

impl Handle {
    /// Creates a handle, or `None` when `radius` is zero.
    ///
    /// Negative radii are stored by magnitude.
    #[must_use]
    pub fn new(angle: f64, radius: f64) -> Option<Self> {
        let radius = radius.abs();
        (radius > 0.0).then_some(Self { angle, radius })
    }

    /// Returns the control point this handle places relative to `origin`.
    #[must_use]
    pub fn control_point(&self, origin: &Point2) -> Point2 {
        *origin + polar_to_cartesian(self.angle, self.radius)
    }
}

/// Which side of an endpoint a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// Shapes the spline leaving the endpoint.
    Forward,
    /// Shapes the spline arriving at the endpoint.
    Reverse,
}

/// Index of a vertex within its [`Bezier`](super::Bezier) curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the position of the vertex in the curve's vertex list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A Bezier control vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertex {
    /// A point the curve passes through, with optional tangent handles.
    Endpoint {
        point: Point2,
        forward: Option<Handle>,
        reverse: Option<Handle>,
    },
    /// A control point shaping the curve between two endpoints.
    Midpoint { point: Point2 },
}

impl Vertex {
    /// Creates an endpoint without handles.
    #[must_use]
    pub fn endpoint(point: Point2) -> Self {
        Self::Endpoint {
            point,
            forward: None,
            reverse: None,
        }
    }

    /// Creates a control midpoint.
    #[must_use]
    pub fn midpoint(point: Point2) -> Self {
        Self::Midpoint { point }
    }

    /// Returns the vertex position.
    #[must_use]
    pub fn point(&self) -> Point2 {
        match *self {
            Self::Endpoint { point, .. } | Self::Midpoint { point } => point,
        }
    }

    /// Returns whether the curve passes through this vertex.
    #[must_use]
    pub fn is_endpoint(&self) -> bool {
        matches!(self, Self::Endpoint { .. })
    }

    /// Returns whether this vertex is a control midpoint.
    #[must_use]
    pub fn is_midpoint(&self) -> bool {
        matches!(self, Self::Midpoint { .. })
    }

    /// Returns the handle on `side`, if any. Midpoints never carry handles.
    #[must_use]
    pub fn handle(&self, side: HandleSide) -> Option<Handle> {
        match *self {
            Self::Endpoint { forward, .. } if side == HandleSide::Forward => forward,
            Self::Endpoint { reverse, .. } => reverse,
            Self::Midpoint { .. } => None,
        }
    }

    /// Returns whether the vertex carries any handle.
    #[must_use]
    pub fn has_handles(&self) -> bool {
        self.handle(HandleSide::Forward).is_some() || self.handle(HandleSide::Reverse).is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_radius_is_no_handle() {
        assert!(Handle::new(1.0, 0.0).is_none());
        assert!(Handle::new(1.0, -0.0).is_none());
    }

    #[test]
    fn negative_radius_is_stored_by_magnitude() {
        let h = Handle::new(0.5, -3.0).unwrap();
        assert!((h.radius - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn handle_control_point_is_offset_from_origin() {
        let h = Handle::new(FRAC_PI_2, 2.0).unwrap();
        let p = h.control_point(&Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn midpoints_report_no_handles() {
        let v = Vertex::midpoint(Point2::new(2.0, 3.0));
        assert!(v.is_midpoint());
        assert!(!v.has_handles());
        assert_eq!(v.point(), Point2::new(2.0, 3.0));
    }

    #[test]
    fn endpoint_handle_lookup_by_side() {
        let v = Vertex::Endpoint {
            point: Point2::origin(),
            forward: Handle::new(0.0, 1.0),
            reverse: None,
        };
        assert!(v.handle(HandleSide::Forward).is_some());
        assert!(v.handle(HandleSide::Reverse).is_none());
        assert!(v.has_handles());
    }
}
