use crate::cost::Cost;

/// Minimal search interface: neighbor enumeration over nodes of type `N`.
pub trait Pather<N> {
    /// Append the neighbors of `node` into `buf`. The caller clears `buf`
    /// before calling. Every appended node is an owned, independent value.
    fn neighbors(&self, node: &N, buf: &mut Vec<N>);
}

/// Pather with weighted edges.
pub trait WeightedPather<N>: Pather<N> {
    /// Numeric type of edge costs and scores.
    type Cost: Cost;

    /// Cost of moving from `from` to the adjacent `to`. Must be >= 0.
    fn cost(&self, from: &N, to: &N) -> Self::Cost;
}

/// Full A* pather: a goal condition and a heuristic toward it.
pub trait AstarPather<N>: WeightedPather<N> {
    /// Whether `node` ends the search.
    fn is_goal(&self, node: &N) -> bool;

    /// Estimated remaining cost from `node` to the nearest goal.
    ///
    /// Paths are optimal when this never overestimates (admissible).
    fn estimate(&self, node: &N) -> Self::Cost;
}
