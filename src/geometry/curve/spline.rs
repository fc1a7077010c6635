use crate::error::{GeometryError, Result};
use crate::math::{BezierPolynomial, Point2, PolynomialOrder, Vector2};

use super::{Curve, CurveDomain};

/// A single Bezier segment of order 1 to 4.
///
/// Built from one run of 2 to 5 points: the two endpoints plus up to three
/// control midpoints between them. Each axis is held as an independent
/// power-basis polynomial over `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSpline {
    px: BezierPolynomial,
    py: BezierPolynomial,
}

impl BezierSpline {
    /// Creates a spline from its ordered control points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOrder` unless 2 to 5 points are given.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Ok(Self {
            px: BezierPolynomial::from_control_values(&xs)?,
            py: BezierPolynomial::from_control_values(&ys)?,
        })
    }

    /// Returns the order shared by both axis polynomials.
    #[must_use]
    pub fn order(&self) -> PolynomialOrder {
        self.px.order()
    }

    /// Returns the x-axis polynomial.
    #[must_use]
    pub fn x_polynomial(&self) -> &BezierPolynomial {
        &self.px
    }

    /// Returns the y-axis polynomial.
    #[must_use]
    pub fn y_polynomial(&self) -> &BezierPolynomial {
        &self.py
    }

    /// Returns the point at `t`. Defined for any `t`, not only `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        Point2::new(self.px.value(t), self.py.value(t))
    }

    /// Returns the derivative vector at `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector2 {
        Vector2::new(self.px.first_derivative(t), self.py.first_derivative(t))
    }

    /// Returns the tangent direction at `t` as an angle in radians.
    ///
    /// A zero derivative yields `0.0` (`atan2(0, 0)`).
    #[must_use]
    pub fn slope_angle(&self, t: f64) -> f64 {
        self.py.first_derivative(t).atan2(self.px.first_derivative(t))
    }

    /// Returns the rate of change of the slope `dy/dx` with respect to `t`.
    ///
    /// Diagnostic only; flattening estimates curvature from [`Self::slope_angle`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when `dx/dt` is zero at `t`
    /// (vertical tangent or stationary point).
    pub fn slope_curvature(&self, t: f64) -> Result<f64> {
        let x1 = self.px.first_derivative(t);
        let y1 = self.py.first_derivative(t);
        let x2 = self.px.second_derivative(t);
        let y2 = self.py.second_derivative(t);
        if x1 == 0.0 {
            return Err(GeometryError::Degenerate(format!("vertical tangent at t = {t}")).into());
        }
        Ok((x1 * y2 - y1 * x2) / (x1 * x1))
    }

    fn check_parameter(&self, t: f64) -> Result<()> {
        let domain = self.domain();
        if domain.contains(t) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into())
        }
    }
}

impl Curve for BezierSpline {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.check_parameter(t)?;
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.check_parameter(t)?;
        Ok(self.derivative_at(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        self.point_at(0.0) == self.point_at(1.0)
    }
}
