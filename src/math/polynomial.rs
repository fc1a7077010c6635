use crate::error::{GeometryError, Result};

use super::{zero_small, POLY_EPSILON};

/// Degree of a Bezier polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolynomialOrder {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
}

impl PolynomialOrder {
    /// Returns the order for a run of `count` control values.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOrder` unless `count` is in `2..=5`.
    pub fn from_control_count(count: usize) -> Result<Self> {
        match count {
            2 => Ok(Self::Linear),
            3 => Ok(Self::Quadratic),
            4 => Ok(Self::Cubic),
            5 => Ok(Self::Quartic),
            _ => Err(GeometryError::InvalidOrder { count }.into()),
        }
    }

    /// Returns the polynomial degree `n` (1 through 4).
    #[must_use]
    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
            Self::Quartic => 4,
        }
    }
}

/// One axis of a Bezier spline in power-basis form.
///
/// `f(t) = a + b·t + c·t² + d·t³ + e·t⁴`, with only the first `n + 1`
/// coefficients meaningful for degree `n`. The remaining ones are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPolynomial {
    order: PolynomialOrder,
    coefficients: [f64; 5],
}

#[allow(clippy::many_single_char_names)]
impl BezierPolynomial {
    /// Builds the polynomial from its Bezier control values.
    ///
    /// Expands the Bernstein basis into the power basis. Coefficients whose
    /// magnitude is at most [`POLY_EPSILON`] times the sum of all coefficient
    /// magnitudes are snapped to exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOrder` unless 2 to 5 values are given.
    pub fn from_control_values(x: &[f64]) -> Result<Self> {
        let order = PolynomialOrder::from_control_count(x.len())?;
        let mut k = [0.0; 5];
        match order {
            PolynomialOrder::Linear => {
                k[0] = x[0];
                k[1] = -x[0] + x[1];
            }
            PolynomialOrder::Quadratic => {
                k[0] = x[0];
                k[1] = -2.0 * x[0] + 2.0 * x[1];
                k[2] = x[0] - 2.0 * x[1] + x[2];
            }
            PolynomialOrder::Cubic => {
                k[0] = x[0];
                k[1] = -3.0 * x[0] + 3.0 * x[1];
                k[2] = 3.0 * x[0] - 6.0 * x[1] + 3.0 * x[2];
                k[3] = -x[0] + 3.0 * x[1] - 3.0 * x[2] + x[3];
            }
            PolynomialOrder::Quartic => {
                k[0] = x[0];
                k[1] = -4.0 * x[0] + 4.0 * x[1];
                k[2] = 6.0 * x[0] - 12.0 * x[1] + 6.0 * x[2];
                k[3] = -4.0 * x[0] + 12.0 * x[1] - 12.0 * x[2] + 4.0 * x[3];
                k[4] = x[0] - 4.0 * x[1] + 6.0 * x[2] - 4.0 * x[3] + x[4];
            }
        }

        let sum: f64 = k.iter().map(|c| c.abs()).sum();
        for c in &mut k {
            *c = zero_small(*c, sum, POLY_EPSILON);
        }

        Ok(Self {
            order,
            coefficients: k,
        })
    }

    /// Returns the order of the polynomial.
    #[must_use]
    pub fn order(&self) -> PolynomialOrder {
        self.order
    }

    /// Returns the meaningful power-basis coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..=self.order.degree()]
    }

    /// Evaluates the polynomial at `t`.
    #[must_use]
    pub fn value(&self, t: f64) -> f64 {
        let [a, b, c, d, e] = self.coefficients;
        match self.order {
            PolynomialOrder::Linear => a + t * b,
            PolynomialOrder::Quadratic => a + t * (b + t * c),
            PolynomialOrder::Cubic => a + t * (b + t * (c + t * d)),
            PolynomialOrder::Quartic => a + t * (b + t * (c + t * (d + t * e))),
        }
    }

    /// Evaluates the first derivative at `t`.
    #[must_use]
    pub fn first_derivative(&self, t: f64) -> f64 {
        let [_, b, c, d, e] = self.coefficients;
        match self.order {
            PolynomialOrder::Linear => b,
            PolynomialOrder::Quadratic => b + t * 2.0 * c,
            PolynomialOrder::Cubic => b + t * (2.0 * c + t * 3.0 * d),
            PolynomialOrder::Quartic => b + t * (2.0 * c + t * (3.0 * d + t * 4.0 * e)),
        }
    }

    /// Evaluates the second derivative at `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> f64 {
        let [_, _, c, d, e] = self.coefficients;
        match self.order {
            PolynomialOrder::Linear => 0.0,
            PolynomialOrder::Quadratic => 2.0 * c,
            PolynomialOrder::Cubic => 2.0 * (c + t * 3.0 * d),
            PolynomialOrder::Quartic => 2.0 * (c + t * 3.0 * (d + t * 2.0 * e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::PolybezError;
    use approx::assert_relative_eq;

    const CONTROLS: [&[f64]; 4] = [
        &[3.0, -7.0],
        &[1.0, 5.0, -2.0],
        &[0.0, 4.0, -3.0, 9.0],
        &[2.0, -1.0, 6.0, 8.0, -5.0],
    ];

    #[test]
    fn interpolates_first_and_last_control_value() {
        for values in CONTROLS {
            let p = BezierPolynomial::from_control_values(values).unwrap();
            assert_eq!(p.order().degree(), values.len() - 1);
            assert_eq!(p.value(0.0), values[0]);
            assert_eq!(p.value(1.0), values[values.len() - 1]);
        }
    }

    #[test]
    fn rejects_bad_control_counts() {
        for count in [0, 1, 6, 9] {
            let values = vec![1.0; count];
            let err = BezierPolynomial::from_control_values(&values).unwrap_err();
            assert!(matches!(
                err,
                PolybezError::Geometry(GeometryError::InvalidOrder { count: c }) if c == count
            ));
        }
    }

    #[test]
    fn quadratic_coefficients() {
        let p = BezierPolynomial::from_control_values(&[1.0, 5.0, -2.0]).unwrap();
        assert_eq!(p.coefficients(), &[1.0, 8.0, -11.0]);
    }

    #[test]
    fn quartic_coefficients() {
        let p = BezierPolynomial::from_control_values(&[2.0, -1.0, 6.0, 8.0, -5.0]).unwrap();
        assert_eq!(p.coefficients(), &[2.0, -12.0, 60.0, -60.0, 5.0]);
    }

    #[test]
    fn snaps_negligible_coefficient_to_zero() {
        let p = BezierPolynomial::from_control_values(&[1e12, 1e12 + 0.5]).unwrap();
        assert_eq!(p.coefficients()[0], 1e12);
        assert_eq!(p.coefficients()[1], 0.0);
        assert_eq!(p.first_derivative(0.3), 0.0);
    }

    #[test]
    fn keeps_significant_coefficients() {
        let p = BezierPolynomial::from_control_values(&[1e3, 1e3 + 0.5]).unwrap();
        assert_eq!(p.coefficients()[1], 0.5);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-6;
        for values in CONTROLS {
            let p = BezierPolynomial::from_control_values(values).unwrap();
            for t in [0.1, 0.45, 0.8] {
                let d1 = (p.value(t + h) - p.value(t - h)) / (2.0 * h);
                assert_relative_eq!(p.first_derivative(t), d1, epsilon = 1e-5, max_relative = 1e-6);
                let d2 = (p.first_derivative(t + h) - p.first_derivative(t - h)) / (2.0 * h);
                assert_relative_eq!(p.second_derivative(t), d2, epsilon = 1e-5, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn linear_has_constant_slope() {
        let p = BezierPolynomial::from_control_values(&[0.0, 10.0]).unwrap();
        assert_eq!(p.first_derivative(0.0), 10.0);
        assert_eq!(p.first_derivative(1.0), 10.0);
        assert_eq!(p.second_derivative(0.5), 0.0);
    }
}
