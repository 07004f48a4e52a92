//! Helpers for searching axis-aligned grids of [`Point`]s.

use trek_core::Point;

use crate::error::PathNotFound;
use crate::search::search_to;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// The 4-connected neighbors of `p` for which `keep` returns `true`.
pub fn cardinal_neighbors(p: Point, keep: impl Fn(Point) -> bool) -> Vec<Point> {
    p.neighbors_4().into_iter().filter(|&n| keep(n)).collect()
}

/// The 8-connected neighbors of `p` for which `keep` returns `true`.
pub fn all_neighbors(p: Point, keep: impl Fn(Point) -> bool) -> Vec<Point> {
    p.neighbors_8().into_iter().filter(|&n| keep(n)).collect()
}

/// Shortest path on a grid where every step costs 1, guided by Manhattan
/// distance.
///
/// Returns the points after `start` up to and including `end`.
pub fn search_grid(
    start: Point,
    end: Point,
    neighbors: impl Fn(Point) -> Vec<Point>,
) -> Result<Vec<Point>, PathNotFound> {
    search_grid_with_cost(start, end, neighbors, |_, _| 1)
}

/// Like [`search_grid`], with `cost(from, to)` pricing each step.
///
/// Manhattan distance is only admissible when every step costs at least 1.
pub fn search_grid_with_cost(
    start: Point,
    end: Point,
    neighbors: impl Fn(Point) -> Vec<Point>,
    cost: impl Fn(Point, Point) -> i32,
) -> Result<Vec<Point>, PathNotFound> {
    search_to(
        start,
        &end,
        |p| neighbors(*p),
        |a, b| cost(*a, *b),
        |p, goal| manhattan(*p, *goal),
    )
}
