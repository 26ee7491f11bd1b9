//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are "bridges" or
//! "bottlenecks": removing them lengthens or breaks many routes.
//!
//! # Algorithm
//!
//! Brandes (2001):
//!
//! 1. For each source node `s`, build the shortest-path record (BFS when
//!    unweighted, Dijkstra when edge weights are given).
//! 2. Accumulate dependency scores in reverse discovery order (farthest
//!    nodes first) and add each node's dependency to its running total.
//! 3. Rescale.
//!
//! Complexity: O(V * E) unweighted, O(V * (V + E) log V) weighted.
//!
//! # Scaling
//!
//! For undirected graphs both `(s, t)` and `(t, s)` are visited, so the sums
//! are halved to count each unordered pair once. With `normalized` set and
//! more than two nodes, the result is then multiplied by
//! `1 / ((n-1)(n-2))`, doubled for undirected graphs. For `n <= 2` there is
//! no valid scale and the (all-zero) raw sums are returned.
//!
//! # Parallelism
//!
//! Sources are independent. With [`BetweennessConfig::parallel`] set, each
//! rayon worker folds its sources into a private partial vector and the
//! partials are summed at the end. Summation order then differs from the
//! sequential run, so results agree only up to floating-point rounding.

use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::{AdjacencyGraph, EdgeWeights};
use crate::metrics::CentralityMap;
use crate::paths::{accumulate_dependencies, bfs, dijkstra};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetweennessConfig {
    /// Rescale into `[0, 1]` by the number of pairs not involving the node.
    /// Default: true.
    pub normalized: bool,
    /// Treat the graph as directed (no pair halving, directed scale).
    /// Default: false.
    pub directed: bool,
    /// Spread sources over the rayon thread pool.
    /// Default: false.
    pub parallel: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalized: true,
            directed: false,
            parallel: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Betweenness
// ---------------------------------------------------------------------------

/// Compute betweenness centrality for every node of `graph`.
///
/// When `weights` is `Some`, path lengths are sums of edge weights (missing
/// entries weigh `1.0`); otherwise every edge is one hop.
///
/// # Errors
///
/// Returns [`crate::error::CentralityError::InvalidWeight`] if a supplied
/// weight is negative or not finite. Nothing is computed in that case.
#[instrument(skip(graph, weights))]
pub fn betweenness_centrality<N>(
    graph: &AdjacencyGraph<N>,
    config: &BetweennessConfig,
    weights: Option<&EdgeWeights<N>>,
) -> Result<CentralityMap<N>>
where
    N: Clone + Eq + Hash + Debug + Send + Sync,
{
    let n = graph.node_count();

    if n == 0 {
        return Ok(CentralityMap::new());
    }

    let table = weights.map(|w| graph.weight_table(w)).transpose()?;

    // Add every dependency emitted for source `s` into `acc`.
    let accumulate_source = |s: usize, acc: &mut [f64]| {
        let paths = match &table {
            Some(t) => dijkstra(graph, s, t),
            None => bfs(graph, s),
        };
        accumulate_dependencies(&paths, |w, delta| acc[w] += delta);
    };

    let mut cb: Vec<f64> = if config.parallel {
        (0..n)
            .into_par_iter()
            .fold(
                || vec![0.0; n],
                |mut acc, s| {
                    accumulate_source(s, &mut acc);
                    acc
                },
            )
            .reduce(
                || vec![0.0; n],
                |mut total, partial| {
                    for (t, p) in total.iter_mut().zip(partial) {
                        *t += p;
                    }
                    total
                },
            )
    } else {
        let mut acc = vec![0.0; n];
        for s in 0..n {
            accumulate_source(s, &mut acc);
        }
        acc
    };

    let scale = rescale_factor(n, config);
    for b in &mut cb {
        *b *= scale;
    }

    debug!(
        nodes = n,
        weighted = table.is_some(),
        parallel = config.parallel,
        scale,
        "betweenness computed"
    );

    Ok(graph
        .nodes()
        .zip(cb)
        .map(|(id, score)| (id.clone(), score))
        .collect())
}

/// Factor applied to the raw Brandes sums.
#[allow(clippy::cast_precision_loss)]
fn rescale_factor(n: usize, config: &BetweennessConfig) -> f64 {
    // Each unordered pair was counted from both ends.
    let mut scale = if config.directed { 1.0 } else { 0.5 };

    if config.normalized {
        if n > 2 {
            let pairs = ((n - 1) * (n - 2)) as f64;
            scale *= if config.directed { 1.0 / pairs } else { 2.0 / pairs };
        } else {
            debug!(nodes = n, "too few nodes to normalize betweenness");
        }
    }

    scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CentralityError;
    use crate::graph::Orientation;

    fn undirected(edges: &[(&'static str, &'static str)]) -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges(edges.iter().copied(), Orientation::Undirected)
    }

    fn directed(edges: &[(&'static str, &'static str)]) -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges(edges.iter().copied(), Orientation::Directed)
    }

    const RAW: BetweennessConfig = BetweennessConfig {
        normalized: false,
        directed: false,
        parallel: false,
    };

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < 1e-10,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_graph_returns_empty() {
        let g = AdjacencyGraph::<u32>::default();
        let bc = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        assert!(bc.is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        let g = AdjacencyGraph::from_adjacency([("A", vec![])]).expect("closed");
        let bc = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        assert_eq!(bc.get("A"), Some(&0.0));
    }

    #[test]
    fn path_of_four_raw_and_normalized() {
        let g = undirected(&[("A", "B"), ("B", "C"), ("C", "D")]);

        let raw = betweenness_centrality(&g, &RAW, None).expect("ok");
        assert_close(raw["A"], 0.0, "A raw");
        assert_close(raw["B"], 2.0, "B raw");
        assert_close(raw["C"], 2.0, "C raw");
        assert_close(raw["D"], 0.0, "D raw");

        let norm = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        assert_close(norm["B"], 2.0 / 3.0, "B normalized");
        assert_close(norm["C"], 2.0 / 3.0, "C normalized");
        assert_close(norm["A"], 0.0, "A normalized");
    }

    #[test]
    fn star_center_carries_every_pair() {
        let g = undirected(&[("A", "B"), ("A", "C"), ("A", "D"), ("A", "E")]);

        let raw = betweenness_centrality(&g, &RAW, None).expect("ok");
        assert_close(raw["A"], 6.0, "center raw");

        let norm = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        assert_close(norm["A"], 1.0, "center normalized");
        for leaf in ["B", "C", "D", "E"] {
            assert_close(norm[leaf], 0.0, leaf);
        }
    }

    #[test]
    fn directed_chain_uses_directed_scale() {
        let g = directed(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let config = BetweennessConfig {
            normalized: false,
            directed: true,
            parallel: false,
        };
        let raw = betweenness_centrality(&g, &config, None).expect("ok");
        assert_close(raw["B"], 2.0, "B raw");
        assert_close(raw["C"], 2.0, "C raw");

        let config = BetweennessConfig {
            normalized: true,
            ..config
        };
        let norm = betweenness_centrality(&g, &config, None).expect("ok");
        assert_close(norm["B"], 2.0 / 6.0, "B normalized");
        assert_close(norm["D"], 0.0, "D normalized");
    }

    #[test]
    fn diamond_graph_splits_paths() {
        // A → B → D, A → C → D
        // B and C each carry half of the two shortest A→D paths.
        let g = directed(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let config = BetweennessConfig {
            normalized: false,
            directed: true,
            parallel: false,
        };
        let bc = betweenness_centrality(&g, &config, None).expect("ok");
        assert_close(bc["B"], 0.5, "B");
        assert_close(bc["C"], 0.5, "C");
        assert_close(bc["A"], 0.0, "A");
    }

    #[test]
    fn two_nodes_skip_normalization() {
        let g = undirected(&[("A", "B")]);
        let bc = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        assert_close(bc["A"], 0.0, "A");
        assert_close(bc["B"], 0.0, "B");
    }

    #[test]
    fn weights_reroute_shortest_paths() {
        // Square A-B-C-D-A. Heavy A-D edge forces A→D through B and C.
        let g = undirected(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        let mut weights = EdgeWeights::new();
        weights.insert(("A", "D"), 10.0);
        weights.insert(("D", "A"), 10.0);

        let unweighted = betweenness_centrality(&g, &RAW, None).expect("ok");
        let weighted = betweenness_centrality(&g, &RAW, Some(&weights)).expect("ok");

        // Unweighted 4-cycle: every node carries half of one opposite pair.
        for id in ["A", "B", "C", "D"] {
            assert_close(unweighted[id], 0.5, id);
        }
        // Weighted it is the path A-B-C-D.
        assert_close(weighted["B"], 2.0, "B weighted");
        assert_close(weighted["C"], 2.0, "C weighted");
        assert_close(weighted["A"], 0.0, "A weighted");
        assert_close(weighted["D"], 0.0, "D weighted");
    }

    #[test]
    fn negative_weight_is_rejected_up_front() {
        let g = undirected(&[("A", "B"), ("B", "C")]);
        let mut weights = EdgeWeights::new();
        weights.insert(("A", "B"), -2.0);
        let err = betweenness_centrality(&g, &RAW, Some(&weights)).expect_err("negative");
        assert!(matches!(err, CentralityError::InvalidWeight { .. }));
    }

    #[test]
    fn parallel_matches_sequential() {
        let g = undirected(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "E"),
            ("B", "E"),
            ("A", "F"),
            ("F", "G"),
        ]);
        let seq = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        let par_config = BetweennessConfig {
            parallel: true,
            ..BetweennessConfig::default()
        };
        let par = betweenness_centrality(&g, &par_config, None).expect("ok");
        for (id, score) in &seq {
            assert_close(par[id], *score, id);
        }
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        let g = undirected(&[("A", "B"), ("C", "D")]);
        let bc = betweenness_centrality(&g, &BetweennessConfig::default(), None).expect("ok");
        for id in ["A", "B", "C", "D"] {
            assert_close(bc[id], 0.0, id);
        }
    }
}
