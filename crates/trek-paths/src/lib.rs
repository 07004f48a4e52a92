//! Generic shortest-path search.
//!
//! This crate provides an A\* search that works over any node type with
//! `Eq + Hash + Clone` identity: grid cells, graph vertices, or composite
//! states such as position plus time.
//!
//! - **A\*** over the [`AstarPather`] trait seam ([`astar`], [`AStar::run`])
//! - **Closure form** ([`search`], [`search_to`], [`FnPather`])
//! - **Grid helpers** with unit cost and Manhattan guidance
//!   ([`search_grid`], [`search_grid_with_cost`])
//! - A comparator-ordered binary [`Heap`], used as the open set
//!
//! The open set uses lazy deletion: a node whose cost improves is queued
//! again rather than updated in place, and superseded entries are skipped
//! when they surface.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | goal test and heuristic |
//!
//! # Example
//!
//! ```
//! use trek_core::{Point, Range};
//! use trek_paths::{cardinal_neighbors, search_grid};
//!
//! let area = Range::sized(5, 5);
//! let path = search_grid(Point::new(0, 0), Point::new(4, 4), |p| {
//!     cardinal_neighbors(p, |n| area.contains(n))
//! })
//! .unwrap();
//! assert_eq!(path.len(), 8);
//! ```

mod astar;
mod cost;
mod engine;
mod error;
mod grid;
mod heap;
mod search;
mod traits;

pub use astar::astar;
pub use cost::Cost;
pub use engine::{AStar, Route, SearchStats};
pub use error::PathNotFound;
pub use grid::{
    all_neighbors, cardinal_neighbors, chebyshev, manhattan, search_grid, search_grid_with_cost,
};
pub use heap::{Compare, Heap};
pub use search::{FnPather, search, search_to};
pub use traits::{AstarPather, Pather, WeightedPather};
