//! Interactive polygon triangulation core.
//!
//! The crate owns the geometry and state logic only: a caller places outline
//! vertices one by one, issues discrete commands (triangulate, clear), and
//! reads back the current outline and triangle list for rendering. Window
//! creation, drawing, and input plumbing live in whatever binary drives the
//! [`session::Session`]; the library itself is fully headless.
//!
//! Modules
//! - `geom`: 2D primitives and the winding/containment predicates.
//! - `clip`: the ear-clipping triangulator over an id-addressed vertex ring.
//! - `session`: the mutable editing state driven by input events.

pub mod clip;
pub mod geom;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{triangulate, ClipCfg, NonTriangulable, VertexId, VertexLoop};
    pub use crate::geom::rand::{draw_outline_star, ReplayToken, StarCfg};
    pub use crate::geom::{cross, winding_of, Triangle, Winding};
    pub use crate::session::Session;
    pub use nalgebra::Vector2 as Vec2;
}
