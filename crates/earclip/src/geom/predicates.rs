//! Scalar predicates over screen-space loops.

use nalgebra::Vector2;

use super::types::Winding;

/// 2D cross product `a.x*b.y - a.y*b.x`.
///
/// The sign gives the turn direction of the ordered pair (left vs right).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Shoelace winding test under the screen convention (y grows downward).
///
/// Accumulates `(p2.x - p1.x) * (p2.y + p1.y)` over consecutive pairs of the
/// circular loop; a non-negative sum classifies as [`Winding::Clockwise`].
/// The ear-acceptance branch in `clip::ear` is calibrated against this exact
/// sign and tie-break, so neither may change. Loops of 0 or 1 points sum to
/// zero and classify as clockwise rather than failing.
pub fn winding_of(points: &[Vector2<f64>]) -> Winding {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        sum += (p2.x - p1.x) * (p2.y + p1.y);
    }
    if sum >= 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}
