//! Interactive editing state: the outline under construction plus the
//! triangles produced so far.
//!
//! A `Session` is an explicit, passable value rather than ambient state, so
//! the core runs headlessly and tests drive it without any renderer. All
//! transitions are synchronous; the expected drive is one input event at a
//! time from a single thread, with a re-render after each.

use nalgebra::Vector2;

use crate::clip::{self, ClipCfg, NonTriangulable, VertexLoop};
use crate::geom::Triangle;

/// Mutable interaction state behind the three input commands.
#[derive(Clone, Debug, Default)]
pub struct Session {
    outline: VertexLoop,
    triangles: Vec<Triangle>,
    cfg: ClipCfg,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: ClipCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Append a vertex to the outline. Always succeeds.
    pub fn add_vertex(&mut self, x: f64, y: f64) {
        self.outline.push(Vector2::new(x, y));
    }

    /// Triangulate the current outline and append the result to the triangle
    /// set. With fewer than three vertices this is a silent no-op; on success
    /// the outline ends empty; on failure both the outline and the triangle
    /// set are unchanged, so the user can adjust the outline and retry.
    pub fn triangulate(&mut self) -> Result<(), NonTriangulable> {
        let produced = clip::triangulate(&mut self.outline, self.cfg)?;
        self.triangles.extend(produced);
        Ok(())
    }

    /// Drop every produced triangle. The outline in progress is kept, so the
    /// same boundary can be triangulated again after a clear.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Current outline positions, in ring order.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        self.outline.points()
    }

    /// Triangles produced so far, in clip order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
