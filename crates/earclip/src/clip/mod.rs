//! Ear-clipping triangulation over an id-addressed vertex ring.
//!
//! Purpose
//! - Decompose a user-drawn outline into non-overlapping triangles by
//!   repeatedly removing "ears": consecutive vertex triples whose triangle
//!   holds no other outline vertex.
//!
//! Why this design
//! - Vertices carry stable ids ([`VertexId`]) into an append-only position
//!   arena, so the validity check can skip a candidate's own corners by
//!   identity even when another vertex shares their coordinates.
//! - The scan keeps a single circular cursor and retries in place after each
//!   clip; a bounded rejection counter turns inputs that never expose an ear
//!   (self-intersecting or fully degenerate loops) into a
//!   [`NonTriangulable`] error instead of a spin.

mod ear;
mod types;

pub use ear::{is_valid_ear, triangulate};
pub use types::{ClipCfg, NonTriangulable, VertexId, VertexLoop};
