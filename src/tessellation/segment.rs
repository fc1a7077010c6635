use crate::error::{CurveError, Result};
use crate::geometry::{BezierSpline, Vertex};
use crate::math::Point2;

/// Most control midpoints allowed between two endpoints (quartic spline).
const MAX_MIDPOINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    /// Waiting for the endpoint that starts the next run.
    AtEndpoint,
    /// Collecting midpoints until the closing endpoint.
    InMidrun,
}

/// Splits a normalized vertex list into splines.
///
/// Each run goes from one endpoint through up to three midpoints to the next
/// endpoint. The closing endpoint of a run also starts the following one.
///
/// # Errors
///
/// Returns `CurveError::InvalidCurve` if more than three midpoints sit
/// between two endpoints, and `CurveError::InvalidState` if the list does
/// not start on an endpoint or stops in the middle of a run.
pub fn segment(vertices: &[Vertex]) -> Result<Vec<BezierSpline>> {
    let n = vertices.len();
    let mut splines = Vec::new();
    let mut run: Vec<Point2> = Vec::with_capacity(MAX_MIDPOINTS + 2);
    let mut state = SegmentState::AtEndpoint;
    let mut i = 0;

    while i < n {
        match (state, &vertices[i]) {
            (SegmentState::AtEndpoint, Vertex::Endpoint { point, .. }) => {
                run.clear();
                run.push(*point);
                i += 1;
                state = SegmentState::InMidrun;
            }
            (SegmentState::InMidrun, Vertex::Midpoint { point }) => {
                if run.len() > MAX_MIDPOINTS {
                    return Err(CurveError::InvalidCurve(format!(
                        "more than {MAX_MIDPOINTS} consecutive midpoints at index {i}"
                    ))
                    .into());
                }
                run.push(*point);
                i += 1;
            }
            (SegmentState::InMidrun, Vertex::Endpoint { point, .. }) => {
                run.push(*point);
                splines.push(BezierSpline::from_points(&run)?);
                // This endpoint starts the next run: don't advance.
                state = SegmentState::AtEndpoint;
                if i == n - 1 {
                    break;
                }
            }
            (SegmentState::AtEndpoint, Vertex::Midpoint { .. }) => {
                return Err(CurveError::InvalidState(format!(
                    "midpoint at index {i} does not follow an endpoint"
                ))
                .into());
            }
        }
    }

    if state == SegmentState::InMidrun {
        return Err(
            CurveError::InvalidState("vertex list ends in the middle of a spline".to_owned())
                .into(),
        );
    }
    Ok(splines)
}
