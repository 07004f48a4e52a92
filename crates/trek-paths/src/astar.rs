use std::hash::Hash;

use crate::cost::Cost;
use crate::engine::{AStar, NO_PARENT, Record, Route};
use crate::error::PathNotFound;
use crate::traits::AstarPather;

impl<N, C> AStar<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    /// Compute the cheapest path from `start` to any node accepted by
    /// [`AstarPather::is_goal`].
    ///
    /// The returned steps exclude `start` and include the goal. The path is
    /// optimal when costs are non-negative and the heuristic is admissible;
    /// otherwise some path is still returned if one exists.
    pub fn run<P>(&mut self, pather: &P, start: N) -> Result<Route<N, C>, PathNotFound>
    where
        P: AstarPather<N, Cost = C> + ?Sized,
    {
        self.reset();

        let h = pather.estimate(&start);
        let si = self.intern(
            start,
            Record {
                g: C::ZERO,
                f: h,
                parent: NO_PARENT,
            },
        );
        self.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.extract() else {
                break None;
            };

            let ci = current.idx;
            let current_g = self.records[ci].g;

            // A cheaper path to this node was recorded after this entry was
            // queued; the newer entry handles it.
            if current.g > current_g {
                self.stats.stale += 1;
                log::trace!("astar: skipping stale entry for node #{ci}");
                continue;
            }
            self.stats.expanded += 1;

            if pather.is_goal(&self.nodes[ci]) {
                break Some(ci);
            }

            nbuf.clear();
            pather.neighbors(&self.nodes[ci], &mut nbuf);

            for next in nbuf.drain(..) {
                let tentative = current_g + pather.cost(&self.nodes[ci], &next);

                let known = self.index.get(&next).copied();
                let ni = match known {
                    Some(ni) => {
                        if tentative >= self.records[ni].g {
                            continue;
                        }
                        ni
                    }
                    None => self.intern(
                        next,
                        Record {
                            g: tentative,
                            f: tentative,
                            parent: ci,
                        },
                    ),
                };

                let f = tentative + pather.estimate(&self.nodes[ni]);
                self.records[ni] = Record {
                    g: tentative,
                    f,
                    parent: ci,
                };
                self.push(ni);
            }
        };

        self.nbuf = nbuf;

        let Some(goal) = found else {
            log::debug!(
                "astar: open set exhausted after expanding {} nodes ({} discovered)",
                self.stats.expanded,
                self.nodes.len()
            );
            return Err(PathNotFound {
                expanded: self.stats.expanded,
            });
        };

        let steps = self.path_to(goal);
        let cost = self.records[goal].g;
        log::debug!(
            "astar: found {}-step path of cost {:?}; expanded {}, pushed {}, stale {}",
            steps.len(),
            cost,
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale
        );

        Ok(Route {
            steps,
            cost,
            stats: self.stats,
        })
    }
}

/// Run a single A* search with a fresh engine.
///
/// Use [`AStar`] directly to reuse allocations across many searches.
pub fn astar<N, P>(pather: &P, start: N) -> Result<Route<N, P::Cost>, PathNotFound>
where
    N: Eq + Hash + Clone,
    P: AstarPather<N> + ?Sized,
{
    AStar::new().run(pather, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use std::collections::{HashMap, HashSet};

    /// Directed weighted graph over `char` vertices.
    struct Graph {
        edges: HashMap<char, Vec<(char, u32)>>,
        goal: char,
        estimate: fn(char) -> u32,
    }

    impl Graph {
        fn new(edges: &[(char, char, u32)], goal: char) -> Self {
            let mut map: HashMap<char, Vec<(char, u32)>> = HashMap::new();
            for &(a, b, w) in edges {
                map.entry(a).or_default().push((b, w));
            }
            Self {
                edges: map,
                goal,
                estimate: |_| 0,
            }
        }

        fn path_cost(&self, start: char, steps: &[char]) -> u32 {
            let mut total = 0;
            let mut at = start;
            for &s in steps {
                total += self.cost(&at, &s);
                at = s;
            }
            total
        }
    }

    impl Pather<char> for Graph {
        fn neighbors(&self, node: &char, buf: &mut Vec<char>) {
            if let Some(out) = self.edges.get(node) {
                buf.extend(out.iter().map(|&(n, _)| n));
            }
        }
    }

    impl WeightedPather<char> for Graph {
        type Cost = u32;
        fn cost(&self, from: &char, to: &char) -> u32 {
            self.edges[from]
                .iter()
                .filter(|&&(n, _)| n == *to)
                .map(|&(_, w)| w)
                .min()
                .unwrap_or(u32::MAX)
        }
    }

    impl AstarPather<char> for Graph {
        fn is_goal(&self, node: &char) -> bool {
            *node == self.goal
        }
        fn estimate(&self, node: &char) -> u32 {
            (self.estimate)(*node)
        }
    }

    #[test]
    fn prefers_cheaper_two_hop_route() {
        let g = Graph::new(&[('A', 'B', 1), ('B', 'C', 1), ('A', 'C', 5)], 'C');
        let route = astar(&g, 'A').unwrap();
        assert_eq!(route.steps, vec!['B', 'C']);
        assert_eq!(route.cost, 2);
        assert_eq!(g.path_cost('A', &route.steps), 2);
    }

    #[test]
    fn start_is_goal_gives_empty_path() {
        let g = Graph::new(&[('A', 'B', 1)], 'A');
        let route = astar(&g, 'A').unwrap();
        assert!(route.is_empty());
        assert_eq!(route.cost, 0);
        assert_eq!(route.stats.expanded, 1);
    }

    #[test]
    fn unreachable_goal_is_an_error() {
        // Two components: {A, B} and {C, D}.
        let g = Graph::new(&[('A', 'B', 1), ('B', 'A', 1), ('C', 'D', 1)], 'D');
        let err = astar(&g, 'A').unwrap_err();
        assert_eq!(err, PathNotFound { expanded: 2 });
    }

    #[test]
    fn improved_paths_leave_stale_entries() {
        // X is first reached at 5, then at 2 through M. The superseded entry
        // is extracted before the goal and skipped.
        let g = Graph::new(
            &[
                ('S', 'X', 5),
                ('S', 'M', 1),
                ('M', 'X', 1),
                ('X', 'Y', 1),
                ('Y', 'G', 100),
            ],
            'G',
        );
        let route = astar(&g, 'S').unwrap();
        assert_eq!(route.steps, vec!['M', 'X', 'Y', 'G']);
        assert_eq!(route.cost, 103);
        assert_eq!(route.stats.stale, 1);
        assert_eq!(route.stats.pushed, 6);
    }

    #[test]
    fn inadmissible_heuristic_still_finds_a_path() {
        let mut g = Graph::new(&[('A', 'B', 1), ('B', 'C', 1), ('A', 'C', 5)], 'C');
        // Grossly overestimates through B, steering the search to the
        // direct edge.
        g.estimate = |n| if n == 'B' { 100 } else { 0 };
        let route = astar(&g, 'A').unwrap();
        assert_eq!(route.steps, vec!['C']);
        assert_eq!(route.cost, 5);
    }

    #[test]
    fn inconsistent_heuristic_reopens_expanded_node() {
        // B looks expensive, so X is expanded through A at 6 before B
        // offers it at 2. X is then queued and expanded a second time.
        let mut g = Graph::new(
            &[
                ('S', 'A', 1),
                ('S', 'B', 1),
                ('A', 'X', 5),
                ('B', 'X', 1),
                ('X', 'G', 10),
            ],
            'G',
        );
        g.estimate = |n| if n == 'B' { 10 } else { 0 };
        let route = astar(&g, 'S').unwrap();
        assert_eq!(route.steps, vec!['B', 'X', 'G']);
        assert_eq!(route.cost, 12);
        // S, A, X, B, X again, G.
        assert_eq!(route.stats.expanded, 6);
        assert_eq!(route.stats.pushed, 7);
    }

    #[test]
    fn returned_paths_have_no_repeated_nodes() {
        let g = Graph::new(
            &[
                ('A', 'B', 1),
                ('B', 'A', 1),
                ('B', 'C', 2),
                ('C', 'B', 2),
                ('C', 'A', 1),
                ('A', 'D', 4),
                ('D', 'E', 1),
                ('C', 'E', 3),
            ],
            'E',
        );
        let route = astar(&g, 'A').unwrap();
        let unique: HashSet<char> = route.steps.iter().copied().collect();
        assert_eq!(unique.len(), route.steps.len());
        assert!(!route.steps.contains(&'A'));
        assert_eq!(route.cost, 5);
    }

    #[test]
    fn reused_engine_gives_identical_results() {
        let g = Graph::new(
            &[('A', 'B', 2), ('A', 'C', 2), ('B', 'D', 2), ('C', 'D', 2)],
            'D',
        );
        let mut engine = AStar::new();
        let first = engine.run(&g, 'A').unwrap();
        let second = engine.run(&g, 'A').unwrap();
        assert_eq!(first.cost, 4);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first, second);
        assert_eq!(astar(&g, 'A').unwrap().cost, first.cost);
    }

    #[test]
    fn engine_recovers_after_failure() {
        let dead_end = Graph::new(&[('A', 'B', 1)], 'Z');
        let ok = Graph::new(&[('A', 'B', 1), ('B', 'Z', 1)], 'Z');
        let mut engine = AStar::new();
        assert!(engine.run(&dead_end, 'A').is_err());
        assert_eq!(engine.stats().expanded, 2);
        let route = engine.run(&ok, 'A').unwrap();
        assert_eq!(route.steps, vec!['B', 'Z']);
    }

    #[test]
    fn works_through_trait_objects() {
        let g = Graph::new(&[('A', 'B', 3)], 'B');
        let dyn_pather: &dyn AstarPather<char, Cost = u32> = &g;
        assert_eq!(astar(dyn_pather, 'A').unwrap().cost, 3);
    }
}
