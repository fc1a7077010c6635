//! Normalization passes applied to a curve's vertex list before flattening.

use crate::error::{CurveError, Result};

use super::vertex::{HandleSide, Vertex};

/// Runs handle expansion, closure and validation, in that order.
///
/// # Errors
///
/// Returns `CurveError::InvalidCurve` if the normalized list is malformed.
pub(crate) fn fixups(vertices: &[Vertex], closed: bool) -> Result<Vec<Vertex>> {
    let expanded = expand_handles(vertices);
    let closed_list = close(expanded, closed)?;
    validate(&closed_list, closed)?;
    Ok(closed_list)
}

/// Replaces every handle with an explicit control midpoint.
///
/// A reverse handle becomes a midpoint just before its endpoint and a
/// forward handle one just after. The result is rotated to start at the
/// first endpoint, so a reverse handle on the first vertex ends up last.
pub(crate) fn expand_handles(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(vertices.len() * 3);
    for v in vertices {
        let point = v.point();
        if let Some(rev) = v.handle(HandleSide::Reverse) {
            out.push(Vertex::midpoint(rev.control_point(&point)));
        }
        out.push(match v {
            Vertex::Endpoint { .. } => Vertex::endpoint(point),
            Vertex::Midpoint { .. } => *v,
        });
        if let Some(fwd) = v.handle(HandleSide::Forward) {
            out.push(Vertex::midpoint(fwd.control_point(&point)));
        }
    }

    match out.iter().position(Vertex::is_endpoint) {
        Some(start) if start > 0 => {
            let mut rotated = Vec::with_capacity(out.len());
            rotated.extend_from_slice(&out[start..]);
            rotated.extend_from_slice(&out[..start]);
            rotated
        }
        _ => out,
    }
}

/// Appends a copy of the first vertex when a closed curve does not already
/// return to it.
///
/// An endpoint equal to the start (exact comparison) already closes the
/// loop. A trailing midpoint always needs the closing endpoint.
pub(crate) fn close(mut vertices: Vec<Vertex>, closed: bool) -> Result<Vec<Vertex>> {
    if !closed {
        return Ok(vertices);
    }
    let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) else {
        return Ok(vertices);
    };
    if !first.is_endpoint() {
        return Err(
            CurveError::InvalidCurve("closed curve must start with an endpoint".to_owned()).into(),
        );
    }
    let needs_closing = match last {
        Vertex::Endpoint { point, .. } => point != first.point(),
        Vertex::Midpoint { .. } => true,
    };
    if needs_closing {
        vertices.push(first);
    }
    Ok(vertices)
}

/// Checks the structural invariants the segmenter relies on.
///
/// # Errors
///
/// Returns `CurveError::InvalidCurve` if there are fewer than two vertices,
/// the first vertex is not an endpoint, or an open curve does not end on one.
pub(crate) fn validate(vertices: &[Vertex], closed: bool) -> Result<()> {
    let n = vertices.len();
    if n < 2 {
        return Err(CurveError::InvalidCurve(format!(
            "bezier curve must have at least two vertices, got {n}"
        ))
        .into());
    }
    if !vertices[0].is_endpoint() {
        return Err(
            CurveError::InvalidCurve("bezier curve must start with an endpoint".to_owned()).into(),
        );
    }
    if !closed && !vertices[n - 1].is_endpoint() {
        return Err(CurveError::InvalidCurve(
            "open bezier curve must end with an endpoint".to_owned(),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolybezError;
    use crate::geometry::bezier::vertex::Handle;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn ep(x: f64, y: f64) -> Vertex {
        Vertex::endpoint(Point2::new(x, y))
    }

    fn mp(x: f64, y: f64) -> Vertex {
        Vertex::midpoint(Point2::new(x, y))
    }

    fn kinds(vertices: &[Vertex]) -> String {
        vertices
            .iter()
            .map(|v| if v.is_endpoint() { 'E' } else { 'M' })
            .collect()
    }

    #[test]
    fn expansion_without_handles_is_identity() {
        let vs = vec![ep(0.0, 0.0), mp(1.0, 1.0), ep(2.0, 0.0)];
        assert_eq!(expand_handles(&vs), vs);
    }

    #[test]
    fn expansion_places_reverse_before_and_forward_after() {
        let vs = vec![
            ep(0.0, 0.0),
            Vertex::Endpoint {
                point: Point2::new(10.0, 0.0),
                forward: Handle::new(0.0, 2.0),
                reverse: Handle::new(std::f64::consts::PI, 3.0),
            },
            ep(20.0, 0.0),
        ];
        let out = expand_handles(&vs);
        assert_eq!(kinds(&out), "EMEME");
        assert_abs_diff_eq!(out[1].point().x, 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[3].point().x, 12.0, epsilon = 1e-12);
        assert!(!out[2].has_handles());
    }

    #[test]
    fn expansion_rotates_leading_midpoint_to_end() {
        let vs = vec![
            Vertex::Endpoint {
                point: Point2::new(0.0, 0.0),
                forward: None,
                reverse: Handle::new(std::f64::consts::FRAC_PI_2, 1.0),
            },
            ep(5.0, 0.0),
        ];
        let out = expand_handles(&vs);
        assert_eq!(kinds(&out), "EEM");
        assert_eq!(out[0].point(), Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(out[2].point().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn closure_is_noop_for_open_curves() {
        let vs = vec![ep(0.0, 0.0), ep(1.0, 0.0)];
        assert_eq!(close(vs.clone(), false).unwrap(), vs);
    }

    #[test]
    fn closure_appends_start_when_needed() {
        let vs = vec![ep(0.0, 0.0), mp(5.0, 10.0), ep(10.0, 0.0)];
        let out = close(vs, true).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[3], ep(0.0, 0.0));
    }

    #[test]
    fn closure_skips_already_closed_loop() {
        let vs = vec![ep(0.0, 0.0), mp(5.0, 10.0), ep(0.0, 0.0)];
        assert_eq!(close(vs, true).unwrap().len(), 3);
    }

    #[test]
    fn closure_after_trailing_midpoint_always_appends() {
        let vs = vec![ep(0.0, 0.0), ep(5.0, 0.0), mp(0.0, 0.0)];
        let out = close(vs, true).unwrap();
        assert_eq!(kinds(&out), "EEME");
    }

    #[test]
    fn closure_rejects_leading_midpoint() {
        let vs = vec![mp(0.0, 0.0), ep(1.0, 0.0)];
        assert!(matches!(
            close(vs, true),
            Err(PolybezError::Curve(CurveError::InvalidCurve(_)))
        ));
    }

    #[test]
    fn validation_failures() {
        let cases = [
            (vec![ep(0.0, 0.0)], false),
            (vec![mp(0.0, 0.0)], false),
            (vec![mp(0.0, 0.0), ep(1.0, 0.0)], false),
            (vec![ep(0.0, 0.0), mp(1.0, 0.0)], false),
        ];
        for (vs, closed) in cases {
            assert!(matches!(
                validate(&vs, closed),
                Err(PolybezError::Curve(CurveError::InvalidCurve(_)))
            ));
        }
    }

    #[test]
    fn closed_curve_may_end_on_midpoint() {
        let vs = vec![ep(0.0, 0.0), mp(1.0, 0.0)];
        assert!(validate(&vs, true).is_ok());
    }
}
