use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{Bezier, BezierSpline};
use crate::math::PolynomialOrder;

use super::{segment, FlattenParams, Polygon};

/// Flattens a Bezier curve into a polygon.
///
/// Lines contribute their two endpoints. Higher orders are sampled from
/// `t = 0` with a step that grows where the tangent angle barely changes
/// and falls back to [`FlattenParams::min_step`] where it turns by at least
/// [`FlattenParams::epsilon`] per step. Every spline ends with its exact
/// endpoint.
#[derive(Debug)]
pub struct TessellateBezier<'a> {
    curve: &'a Bezier,
    params: FlattenParams,
}

impl<'a> TessellateBezier<'a> {
    /// Creates a new flattening operation.
    #[must_use]
    pub fn new(curve: &'a Bezier, params: FlattenParams) -> Self {
        Self { curve, params }
    }

    /// Executes the flattening, returning the polygon in curve order.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the curve is
    /// malformed. No partial polygon is produced.
    pub fn execute(&self) -> Result<Polygon> {
        self.params.validate()?;
        let vertices = self.curve.fixed_vertices()?;
        let splines = segment(&vertices)?;
        debug!(
            vertices = vertices.len(),
            splines = splines.len(),
            closed = self.curve.is_closed(),
            "flattening bezier curve"
        );

        let mut polygon = Polygon::new();
        for (index, spline) in splines.iter().enumerate() {
            let before = polygon.len();
            sample_spline(spline, &self.params, &mut polygon);
            trace!(
                index,
                order = spline.order().degree(),
                points = polygon.len() - before,
                "sampled spline"
            );
        }

        debug!(points = polygon.len(), "flattened bezier curve");
        Ok(polygon)
    }
}

/// Appends the samples of one spline to `polygon`.
fn sample_spline(spline: &BezierSpline, params: &FlattenParams, polygon: &mut Polygon) {
    if spline.order() == PolynomialOrder::Linear {
        polygon.push(spline.point_at(0.0));
        polygon.push(spline.point_at(1.0));
        return;
    }

    let dt_min = params.min_step();
    let epsilon = params.epsilon;
    let mut t = 0.0;
    while t < 1.0 {
        polygon.push(spline.point_at(t));
        let dtheta = (spline.slope_angle(t + dt_min) - spline.slope_angle(t)).abs();
        t += if dtheta < f64::MIN_POSITIVE {
            // No turning at all: the rest of the spline is straight.
            1.0
        } else if dtheta < epsilon {
            dt_min * (epsilon / dtheta)
        } else {
            dt_min
        };
    }
    polygon.push(spline.point_at(1.0));
}
