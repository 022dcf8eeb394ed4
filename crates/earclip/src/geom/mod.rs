//! 2D screen-space geometry: triangles, winding, containment.
//!
//! Purpose
//! - Provide the small set of exact-formula predicates the ear clipper is
//!   built on: the 2D cross product, the shoelace winding test, and inclusive
//!   point-in-triangle containment.
//!
//! Conventions
//! - Coordinates are screen-space: y grows downward. The winding test's sign
//!   is defined under that convention and must not be flipped; see
//!   `predicates::winding_of`.

pub mod rand;

mod predicates;
mod types;

pub use predicates::{cross, winding_of};
pub use types::{Triangle, Winding};
