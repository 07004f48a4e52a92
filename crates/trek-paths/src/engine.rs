use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cost::{Cost, order};
use crate::heap::{Compare, Heap};

/// A path found by [`AStar::run`](crate::AStar::run).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N, C> {
    /// Nodes after the start, up to and including the goal. Empty when the
    /// start node is itself a goal.
    pub steps: Vec<N>,
    /// Total cost of the path (the goal's g-score).
    pub cost: C,
    /// Work done by the search.
    pub stats: SearchStats,
}

impl<N, C> Route<N, C> {
    /// Number of edges traversed.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the start was already a goal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The goal node, or `None` when the start was the goal.
    pub fn goal(&self) -> Option<&N> {
        self.steps.last()
    }

    /// Consume the route, keeping only its steps.
    pub fn into_steps(self) -> Vec<N> {
        self.steps
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Open-set extractions that were expanded (the goal included).
    pub expanded: usize,
    /// Open-set insertions, the start included.
    pub pushed: usize,
    /// Extractions skipped because a cheaper path had been recorded since.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// Per-node bookkeeping
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Scores of a discovered node. Unseen nodes have no record (infinite g).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Record<C> {
    pub(crate) g: C,
    pub(crate) f: C,
    pub(crate) parent: usize,
}

/// Open-set entry. `g` and `f` are the scores at insertion time and only
/// order the heap; the record arena holds the current ones.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef<C> {
    pub(crate) idx: usize,
    pub(crate) g: C,
    pub(crate) f: C,
}

/// Lowest `f` first; among equal `f`, deeper nodes (higher `g`) first.
fn open_order<C: Cost>(a: &NodeRef<C>, b: &NodeRef<C>) -> Ordering {
    order(&a.f, &b.f).then_with(|| order(&b.g, &a.g))
}

// ---------------------------------------------------------------------------
// AStar
// ---------------------------------------------------------------------------

/// Reusable A* search engine over nodes `N` with costs `C`.
///
/// `AStar` owns the node arena, score records, open set and neighbor buffer.
/// Every [`run`](Self::run) starts from an empty state; only the allocations
/// survive between runs, so repeated searches avoid reallocating.
pub struct AStar<N, C> {
    pub(crate) nodes: Vec<N>,
    pub(crate) records: Vec<Record<C>>,
    pub(crate) index: HashMap<N, usize>,
    pub(crate) open: Heap<NodeRef<C>>,
    pub(crate) nbuf: Vec<N>,
    pub(crate) stats: SearchStats,
}

impl<N, C> Default for AStar<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> AStar<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    /// Create an engine with empty caches.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            records: Vec::new(),
            index: HashMap::new(),
            open: Heap::new(open_order::<C> as Compare<NodeRef<C>>),
            nbuf: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Counters of the most recent run, successful or not.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Drop all per-search state, keeping capacity.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.records.clear();
        self.index.clear();
        self.open.clear();
        self.nbuf.clear();
        self.stats = SearchStats::default();
    }

    /// Register a newly discovered node and return its index.
    pub(crate) fn intern(&mut self, node: N, record: Record<C>) -> usize {
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.records.push(record);
        idx
    }

    /// Queue `idx` with its current scores.
    pub(crate) fn push(&mut self, idx: usize) {
        let r = self.records[idx];
        self.open.insert(NodeRef {
            idx,
            g: r.g,
            f: r.f,
        });
        self.stats.pushed += 1;
    }

    /// Walk parent links back from `goal`, excluding the start node.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut ci = goal;
        while self.records[ci].parent != NO_PARENT {
            path.push(self.nodes[ci].clone());
            ci = self.records[ci].parent;
        }
        path.reverse();
        path
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            steps: vec![3u32, 7, 9],
            cost: 4.5f64,
            stats: SearchStats {
                expanded: 10,
                pushed: 14,
                stale: 2,
            },
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route<u32, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
