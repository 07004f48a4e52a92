//! **trek-core** — geometry shared by the trek crates.
//!
//! [`Point`] is the node type of the grid helpers in `trek-paths`; [`Range`]
//! bounds the grids callers search over.

pub mod geom;

pub use geom::{Point, Range};
