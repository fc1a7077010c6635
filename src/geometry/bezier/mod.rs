mod fixups;
mod vertex;

pub use vertex::{Handle, HandleSide, Vertex, VertexId};

use std::f64::consts::PI;

use crate::error::{CurveError, Result};
use crate::math::Point2;
use crate::tessellation::{FlattenParams, Polygon, TessellateBezier};

use super::curve::BezierSpline;

/// A piecewise Bezier curve described by endpoints, control midpoints and
/// tangent handles.
///
/// Vertices are appended in curve order. Structural checks are deferred
/// until the curve is normalized for flattening, so a curve may be in an
/// invalid state while it is being built.
///
/// ```
/// use polybez::geometry::Bezier;
///
/// let mut curve = Bezier::new();
/// curve.add(0.0, 0.0);
/// curve.add(5.0, 10.0);
/// curve.mark_as_midpoint()?;
/// curve.add(10.0, 0.0);
/// let polygon = curve.polygon()?;
/// assert_eq!(polygon.first(), Some(&polybez::math::Point2::new(0.0, 0.0)));
/// # Ok::<(), polybez::PolybezError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bezier {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl Bezier {
    /// Returns an empty open curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an endpoint at `(x, y)`.
    pub fn add(&mut self, x: f64, y: f64) -> VertexId {
        self.add_point(Point2::new(x, y))
    }

    /// Appends an endpoint.
    pub fn add_point(&mut self, point: Point2) -> VertexId {
        self.push(Vertex::endpoint(point))
    }

    /// Appends a control midpoint.
    pub fn add_midpoint(&mut self, point: Point2) -> VertexId {
        self.push(Vertex::midpoint(point))
    }

    /// Turns the most recently added vertex into a control midpoint.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidOperation` if the curve is empty or the
    /// vertex already carries handles.
    pub fn mark_as_midpoint(&mut self) -> Result<VertexId> {
        let id = self.last_id()?;
        let vertex = &mut self.vertices[id.0];
        if vertex.has_handles() {
            return Err(CurveError::InvalidOperation(
                "can't turn a vertex with handles into a midpoint".to_owned(),
            )
            .into());
        }
        *vertex = Vertex::midpoint(vertex.point());
        Ok(id)
    }

    /// Sets or clears (`radius == 0`) a handle on the endpoint `id`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidOperation` if `id` is unknown or refers to
    /// a midpoint.
    pub fn attach_handle(
        &mut self,
        id: VertexId,
        side: HandleSide,
        angle: f64,
        radius: f64,
    ) -> Result<()> {
        let Some(vertex) = self.vertices.get_mut(id.0) else {
            return Err(
                CurveError::InvalidOperation(format!("no vertex at index {}", id.0)).into(),
            );
        };
        match vertex {
            Vertex::Endpoint {
                forward, reverse, ..
            } => {
                let slot = match side {
                    HandleSide::Forward => forward,
                    HandleSide::Reverse => reverse,
                };
                *slot = Handle::new(angle, radius);
                Ok(())
            }
            Vertex::Midpoint { .. } => Err(CurveError::InvalidOperation(
                "can't place a handle on a curve midpoint".to_owned(),
            )
            .into()),
        }
    }

    /// Sets the forward handle of the most recently added vertex.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidOperation` if the curve is empty or the
    /// last vertex is a midpoint.
    pub fn set_forward_handle(&mut self, angle: f64, radius: f64) -> Result<()> {
        let id = self.last_id()?;
        self.attach_handle(id, HandleSide::Forward, angle, radius)
    }

    /// Sets the reverse handle of the most recently added vertex.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidOperation` if the curve is empty or the
    /// last vertex is a midpoint.
    pub fn set_reverse_handle(&mut self, angle: f64, radius: f64) -> Result<()> {
        let id = self.last_id()?;
        self.attach_handle(id, HandleSide::Reverse, angle, radius)
    }

    /// Sets a smooth handle pair on the most recently added vertex: forward
    /// at `angle`, reverse at `angle + π`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidOperation` if the curve is empty or the
    /// last vertex is a midpoint.
    pub fn set_handle(&mut self, angle: f64, forward_radius: f64, reverse_radius: f64) -> Result<()> {
        self.set_forward_handle(angle, forward_radius)?;
        self.set_reverse_handle(angle + PI, reverse_radius)
    }

    /// Marks the curve as closed.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns whether the curve is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the vertices as built, handles not yet expanded.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex `id`, if it exists.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Returns the number of vertices as built.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether no vertices were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the normalized vertex list used for flattening.
    ///
    /// Handles are expanded into midpoints, a closed curve gets its closing
    /// vertex, and the result is validated. The curve itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the curve is malformed.
    pub fn fixed_vertices(&self) -> Result<Vec<Vertex>> {
        fixups::fixups(&self.vertices, self.closed)
    }

    /// Splits the normalized curve into its Bezier splines.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the curve is malformed.
    pub fn splines(&self) -> Result<Vec<BezierSpline>> {
        crate::tessellation::segment(&self.fixed_vertices()?)
    }

    /// Flattens the curve with the default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is malformed.
    pub fn polygon(&self) -> Result<Polygon> {
        self.polygon_with(&FlattenParams::default())
    }

    /// Flattens the curve with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is malformed.
    pub fn polygon_with(&self, params: &FlattenParams) -> Result<Polygon> {
        TessellateBezier::new(self, *params).execute()
    }

    fn push(&mut self, vertex: Vertex) -> VertexId {
        self.vertices.push(vertex);
        VertexId(self.vertices.len() - 1)
    }

    fn last_id(&self) -> Result<VertexId> {
        match self.vertices.len() {
            0 => Err(CurveError::InvalidOperation("curve has no vertices".to_owned()).into()),
            n => Ok(VertexId(n - 1)),
        }
    }
}
