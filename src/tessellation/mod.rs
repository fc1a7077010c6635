mod segment;
mod tessellate_bezier;

pub use segment::segment;
pub use tessellate_bezier::TessellateBezier;

use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::{dedup_consecutive, signed_area_2d};
use crate::math::Point2;

/// Parameters controlling curvature-adaptive flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    /// Baseline number of samples per spline; the minimum parameter step
    /// is `1 / (samples - 1)`.
    pub samples: usize,
    /// Tangent-angle change (radians) per minimum step above which the
    /// sampler stays at the minimum step.
    pub epsilon: f64,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            samples: 1000,
            epsilon: 0.1,
        }
    }
}

impl FlattenParams {
    /// Creates validated flattening parameters.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if `samples < 2` or
    /// `epsilon` is not a positive finite number.
    pub fn new(samples: usize, epsilon: f64) -> Result<Self> {
        let params = Self { samples, epsilon };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if `samples < 2` or
    /// `epsilon` is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "at least 2 samples are required, got {}",
                self.samples
            ))
            .into());
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "curvature threshold must be positive, got {}",
                self.epsilon
            ))
            .into());
        }
        Ok(())
    }

    /// Returns the minimum parameter step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn min_step(&self) -> f64 {
        1.0 / self.samples.saturating_sub(1) as f64
    }
}

/// A flattened curve: an ordered, append-only list of points.
///
/// Adjacent splines share their boundary point, so the list contains one
/// repeated point per spline joint. Use [`Polygon::deduped`] to collapse them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Returns the points in curve order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polygon, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last point.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns whether the last point equals the first exactly.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Returns a copy with consecutive duplicate points collapsed.
    #[must_use]
    pub fn deduped(&self) -> Self {
        Self {
            points: dedup_consecutive(&self.points),
        }
    }

    /// Signed area enclosed by the points, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_params() {
        let p = FlattenParams::default();
        assert_eq!(p.samples, 1000);
        assert_abs_diff_eq!(p.epsilon, 0.1);
        assert_abs_diff_eq!(p.min_step(), 1.0 / 999.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_bad_params() {
        assert!(FlattenParams::new(1, 0.1).is_err());
        assert!(FlattenParams::new(100, 0.0).is_err());
        assert!(FlattenParams::new(100, -1.0).is_err());
        assert!(FlattenParams::new(100, f64::NAN).is_err());
        assert!(FlattenParams::new(2, 0.5).is_ok());
    }

    #[test]
    fn polygon_closed_and_deduped() {
        let mut p = Polygon::new();
        assert!(!p.is_closed());
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)] {
            p.push(Point2::new(x, y));
        }
        assert!(p.is_closed());
        let d = p.deduped();
        assert_eq!(d.len(), 4);
        assert!(d.is_closed());
        assert_abs_diff_eq!(d.signed_area(), 0.5, epsilon = 1e-12);
        let pts = d.into_points();
        assert_eq!(pts[1], Point2::new(1.0, 0.0));
    }
}
