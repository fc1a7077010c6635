use super::Vector2;

/// Converts a polar offset to a cartesian vector.
///
/// `angle` is measured in radians counter-clockwise from the +X axis.
#[must_use]
pub fn polar_to_cartesian(angle: f64, radius: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(radius * cos, radius * sin)
}

/// Returns `0.0` if `|x|` is negligible relative to `sum`, otherwise `x`.
///
/// `x` is negligible when `|x| <= epsilon * sum`. A zero `sum` leaves `x`
/// unchanged (it can only be zero itself).
#[must_use]
pub fn zero_small(x: f64, sum: f64, epsilon: f64) -> f64 {
    if sum > 0.0 && x.abs() <= epsilon * sum {
        0.0
    } else {
        x
    }
}
