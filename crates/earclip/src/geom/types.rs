//! Winding classification and the output triangle type.

use nalgebra::Vector2;

use super::predicates::cross;

/// Winding direction of a closed vertex loop in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    #[inline]
    pub fn is_clockwise(self) -> bool {
        matches!(self, Winding::Clockwise)
    }
}

/// A filled triangle, corners in the order they were clipped.
///
/// Produced once by the clipper and immutable afterwards; the triangle set a
/// session accumulates is insertion-ordered and not deduplicated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Inclusive containment: points on an edge or corner count as inside.
    ///
    /// Same-side test: `p` is outside iff the three edge crosses carry both a
    /// strictly positive and a strictly negative sign. Works for either corner
    /// winding; a fully degenerate (zero-area) triangle contains every
    /// collinear point between its corners.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let d1 = cross(self.b - self.a, p - self.a);
        let d2 = cross(self.c - self.b, p - self.b);
        let d3 = cross(self.a - self.c, p - self.c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Signed area (negative for one winding, positive for the other).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * cross(self.b - self.a, self.c - self.a)
    }
}
