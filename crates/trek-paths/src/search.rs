//! Closure-based entry points.
//!
//! [`search`] and [`search_to`] take the goal test, neighbor function, cost
//! function and heuristic as plain closures. [`FnPather`] adapts the same
//! closures to the [`AstarPather`] seam for use with a reusable
//! [`AStar`](crate::AStar) engine.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::astar::astar;
use crate::cost::Cost;
use crate::engine::Route;
use crate::error::PathNotFound;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// An [`AstarPather`] built from four closures.
///
/// The neighbor closure returns owned nodes, so every candidate handed to
/// the engine is an independent value.
pub struct FnPather<N, C, G, Nb, Co, H> {
    is_goal: G,
    neighbors: Nb,
    cost: Co,
    heuristic: H,
    _marker: PhantomData<fn(&N) -> C>,
}

impl<N, C, G, Nb, Co, H> FnPather<N, C, G, Nb, Co, H>
where
    G: Fn(&N) -> bool,
    Nb: Fn(&N) -> Vec<N>,
    Co: Fn(&N, &N) -> C,
    H: Fn(&N) -> C,
{
    /// Bundle a goal test, neighbor, cost and heuristic closure.
    pub fn new(is_goal: G, neighbors: Nb, cost: Co, heuristic: H) -> Self {
        Self {
            is_goal,
            neighbors,
            cost,
            heuristic,
            _marker: PhantomData,
        }
    }
}

impl<N, C, G, Nb, Co, H> Pather<N> for FnPather<N, C, G, Nb, Co, H>
where
    Nb: Fn(&N) -> Vec<N>,
{
    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend((self.neighbors)(node));
    }
}

impl<N, C, G, Nb, Co, H> WeightedPather<N> for FnPather<N, C, G, Nb, Co, H>
where
    C: Cost,
    Nb: Fn(&N) -> Vec<N>,
    Co: Fn(&N, &N) -> C,
{
    type Cost = C;

    fn cost(&self, from: &N, to: &N) -> C {
        (self.cost)(from, to)
    }
}

impl<N, C, G, Nb, Co, H> AstarPather<N> for FnPather<N, C, G, Nb, Co, H>
where
    C: Cost,
    G: Fn(&N) -> bool,
    Nb: Fn(&N) -> Vec<N>,
    Co: Fn(&N, &N) -> C,
    H: Fn(&N) -> C,
{
    fn is_goal(&self, node: &N) -> bool {
        (self.is_goal)(node)
    }

    fn estimate(&self, node: &N) -> C {
        (self.heuristic)(node)
    }
}

/// Find the cheapest path from `start` to any node satisfying `is_goal`.
///
/// Returns the nodes after `start` up to and including the goal; an empty
/// vector means `start` itself satisfies `is_goal`. `heuristic` estimates the
/// remaining cost from a node and should never overestimate it.
pub fn search<N, C>(
    start: N,
    is_goal: impl Fn(&N) -> bool,
    neighbors: impl Fn(&N) -> Vec<N>,
    cost: impl Fn(&N, &N) -> C,
    heuristic: impl Fn(&N) -> C,
) -> Result<Vec<N>, PathNotFound>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    let pather: FnPather<N, C, _, _, _, _> = FnPather::new(is_goal, neighbors, cost, heuristic);
    astar(&pather, start).map(Route::into_steps)
}

/// Find the cheapest path from `start` to the fixed node `goal`.
///
/// `heuristic(node, goal)` estimates the remaining cost.
pub fn search_to<N, C>(
    start: N,
    goal: &N,
    neighbors: impl Fn(&N) -> Vec<N>,
    cost: impl Fn(&N, &N) -> C,
    heuristic: impl Fn(&N, &N) -> C,
) -> Result<Vec<N>, PathNotFound>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    search(start, |n| n == goal, neighbors, cost, |n| heuristic(n, goal))
}
