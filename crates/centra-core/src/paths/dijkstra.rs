//! Dijkstra shortest paths with path counting for weighted graphs.
//!
//! Lazy deletion: a node may sit in the heap several times; entries whose
//! distance is worse than the best known one are skipped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::AdjacencyGraph;
use crate::paths::ShortestPaths;

/// Heap entry, ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    distance: f64,
    node: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; node index breaks ties.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted single-source shortest paths from the node at `source`.
///
/// `weights` is indexed by edge index and must be non-negative. A strictly
/// shorter route to `w` replaces its predecessors and path count; a route of
/// exactly equal length appends to them. Ties are only recorded for nodes not
/// yet settled, which keeps every predecessor ahead of its successors on the
/// stack.
///
/// With zero-weight edges this can miss a tie: if `w` is settled before a
/// node `u` at the same distance, the equal-cost edge `u -> w` is not added
/// to `pred[w]` and `sigma[w]` undercounts. Positive weights are unaffected.
#[allow(clippy::float_cmp)] // exact ties are what define equal-length paths
pub(crate) fn dijkstra<N>(graph: &AdjacencyGraph<N>, source: usize, weights: &[f64]) -> ShortestPaths
where
    N: Clone + Eq + Hash + Debug,
{
    let n = graph.node_count();
    let mut paths = ShortestPaths::new(n, source);
    let mut settled = vec![false; n];

    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        distance: 0.0,
        node: source,
    });

    while let Some(Candidate { distance, node: v }) = heap.pop() {
        if settled[v] || distance > paths.distance[v] {
            continue; // stale entry
        }
        settled[v] = true;
        paths.stack.push(v);

        for (edge, w) in graph.out_edges(v) {
            if settled[w] {
                continue;
            }
            let alt = distance + weights[edge];

            if alt < paths.distance[w] {
                paths.distance[w] = alt;
                paths.sigma[w] = paths.sigma[v];
                paths.predecessors[w].clear();
                paths.predecessors[w].push(v);
                heap.push(Candidate {
                    distance: alt,
                    node: w,
                });
            } else if alt == paths.distance[w] {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push(v);
            }
        }
    }

    paths
}
