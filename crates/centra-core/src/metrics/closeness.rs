//! Closeness centrality from breadth-first hop distances.
//!
//! # Algorithm
//!
//! For every node `v`, a BFS over out-neighbors yields hop distances to the
//! nodes `v` can reach. With `D` the sum of those distances (excluding `v`
//! itself) the score is:
//!
//! ```text
//! C(v) = (n - 1) / D      if v reaches at least one other node
//! C(v) = 0                otherwise
//! ```
//!
//! where `n` is the node count of the **whole** graph. In a disconnected
//! graph this differs from the per-component formula, which would use the
//! size of the reachable set.
//!
//! Complexity: O(V * (V + E)).

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::graph::AdjacencyGraph;
use crate::metrics::CentralityMap;

/// Compute closeness centrality for every node of `graph`.
///
/// Edges are unweighted and followed in their stored direction; pass an
/// undirected graph for the usual undirected closeness.
#[must_use]
#[instrument(skip(graph))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality<N>(graph: &AdjacencyGraph<N>) -> CentralityMap<N>
where
    N: Clone + Eq + Hash + Debug,
{
    let n = graph.node_count();
    let mut scores = CentralityMap::with_capacity(n);
    let mut isolated = 0_usize;

    for v in 0..n {
        let (reached, total) = hop_distance_sum(graph, v);
        let score = if reached == 0 {
            isolated += 1;
            0.0
        } else {
            (n - 1) as f64 / total as f64
        };
        scores.insert(graph.node_at(v).clone(), score);
    }

    debug!(nodes = n, isolated, "closeness computed");
    scores
}

/// BFS from `source`; returns (nodes reached besides the source, sum of
/// their hop distances).
fn hop_distance_sum<N>(graph: &AdjacencyGraph<N>, source: usize) -> (usize, usize)
where
    N: Clone + Eq + Hash + Debug,
{
    let mut hops: Vec<Option<usize>> = vec![None; graph.node_count()];
    hops[source] = Some(0);

    let mut queue = VecDeque::from([source]);
    let mut reached = 0;
    let mut total = 0;

    while let Some(v) = queue.pop_front() {
        let next = hops[v].map_or(0, |h| h + 1);
        for w in graph.out_indices(v) {
            if hops[w].is_none() {
                hops[w] = Some(next);
                reached += 1;
                total += next;
                queue.push_back(w);
            }
        }
    }

    (reached, total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
