//! Data types for the clipper: vertex identity, the mutable outline, config.

use nalgebra::Vector2;
use thiserror::Error;

/// Stable identity of a placed vertex, independent of its coordinates.
///
/// Two vertices may sit on the same position; the clipper tells them apart
/// by id, never by coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(pub usize);

/// The mutable outline being built and later consumed by the clipper.
///
/// Positions live in an append-only arena; `ring` holds the ids of the
/// vertices still on the boundary, in insertion order. Indices into the ring
/// wrap modulo its current length, so the boundary is logically circular.
#[derive(Clone, Debug, Default)]
pub struct VertexLoop {
    positions: Vec<Vector2<f64>>,
    ring: Vec<VertexId>,
}

impl VertexLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut out = Self::new();
        for p in points {
            out.push(p);
        }
        out
    }

    /// Append a vertex to the boundary; its id stays valid until `clear`.
    pub fn push(&mut self, p: Vector2<f64>) -> VertexId {
        let id = VertexId(self.positions.len());
        self.positions.push(p);
        self.ring.push(id);
        id
    }

    /// Number of vertices still on the boundary.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    pub fn position(&self, id: VertexId) -> Vector2<f64> {
        self.positions[id.0]
    }

    /// Boundary ids in ring order.
    #[inline]
    pub fn ring(&self) -> &[VertexId] {
        &self.ring
    }

    /// Boundary positions in ring order.
    pub fn points(&self) -> Vec<Vector2<f64>> {
        self.ring.iter().map(|id| self.positions[id.0]).collect()
    }

    /// Drop the boundary and the backing arena. Ids handed out earlier are
    /// invalid afterwards.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.ring.clear();
    }
}

/// Clipper configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClipCfg {
    /// Give up after `attempt_factor * ring length` consecutive rejected
    /// candidates. Once a full sweep of the ring rejects every position the
    /// ring can never change again, so any factor >= 1 only trades how fast
    /// a stuck input is reported; 2 leaves headroom for cursor wrap.
    pub attempt_factor: usize,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self { attempt_factor: 2 }
    }
}

/// The outline never exposed a clippable ear.
///
/// Raised when the rejection budget runs out, which happens for
/// self-intersecting or fully degenerate loops. The outline is left exactly
/// as it was so the caller can edit it and retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("outline is not triangulable ({remaining} vertices left on the ring)")]
pub struct NonTriangulable {
    /// Vertices still on the ring when the attempt budget ran out.
    pub remaining: usize,
}
