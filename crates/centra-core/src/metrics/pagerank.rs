//! PageRank by power iteration with dangling-mass redistribution.
//!
//! # Overview
//!
//! PageRank models a random surfer who follows an out-link with probability
//! `d` and jumps to a uniformly random node otherwise. Nodes reached by many
//! well-ranked nodes rank highly.
//!
//! # Algorithm
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//!                     + d * Σ PR(z) / N               for each dangling z
//! ```
//!
//! Nodes without out-edges ("dangling") spread their rank over every node,
//! so no rank leaks out of the system and the scores keep summing to 1.
//! Parallel edges count once each toward the out-degree and the share, and
//! a self-loop is an ordinary out-edge.
//!
//! Iteration starts from the uniform vector and stops when the L1 change
//! falls below `tolerance`, or after `max_iter` rounds with the last iterate.
//!
//! # Output
//!
//! Returns a [`PageRankResult`] with per-node scores and whether the
//! iteration converged.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CentralityError, Result};
use crate::graph::AdjacencyGraph;
use crate::metrics::CentralityMap;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for PageRank computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when L1 norm of rank delta < tolerance.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

impl PageRankConfig {
    /// Check that every field is in range.
    ///
    /// # Errors
    ///
    /// [`CentralityError::InvalidDamping`] unless `0 < damping < 1`,
    /// [`CentralityError::ZeroIterations`] for `max_iter == 0`, and
    /// [`CentralityError::InvalidTolerance`] unless `tolerance` is positive
    /// and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(CentralityError::InvalidDamping(self.damping));
        }
        if self.max_iter == 0 {
            return Err(CentralityError::ZeroIterations);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CentralityError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult<N> {
    /// PageRank scores: node → score.
    pub scores: CentralityMap<N>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
}

impl<N: Eq + Hash> PartialEq for PageRankResult<N> {
    fn eq(&self, other: &Self) -> bool {
        self.iterations == other.iterations
            && self.converged == other.converged
            && self.scores == other.scores
    }
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

/// Compute PageRank over the out-edges of `graph`.
///
/// # Errors
///
/// Returns the [`PageRankConfig::validate`] error for an out-of-range
/// config. The check runs before anything else, including for an empty
/// graph.
#[instrument(skip(graph))]
#[allow(clippy::cast_precision_loss)]
pub fn page_rank<N>(graph: &AdjacencyGraph<N>, config: &PageRankConfig) -> Result<PageRankResult<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(PageRankResult {
            scores: CentralityMap::new(),
            iterations: 0,
            converged: true,
        });
    }

    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;

    let out_degree: Vec<usize> = (0..n).map(|v| graph.out_indices(v).count()).collect();
    let dangling: Vec<usize> = (0..n).filter(|&v| out_degree[v] == 0).collect();

    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        // Dangling nodes: their combined rank goes to every node equally.
        let dangling_mass: f64 = dangling.iter().map(|&v| ranks[v]).sum();
        let dangling_share = config.damping * dangling_mass / n_f64;
        for r in &mut new_ranks {
            *r = dangling_share;
        }

        for v in 0..n {
            if out_degree[v] == 0 {
                continue;
            }
            let share = config.damping * ranks[v] / out_degree[v] as f64;
            for w in graph.out_indices(v) {
                new_ranks[w] += share;
            }
        }

        for r in &mut new_ranks {
            *r += teleport;
        }

        // Check convergence: L1 norm of delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(nodes = n, iterations, "pagerank converged");
    } else {
        debug!(
            nodes = n,
            iterations, "pagerank hit the iteration cap, returning last iterate"
        );
    }

    let scores = graph
        .nodes()
        .zip(ranks)
        .map(|(id, score)| (id.clone(), score))
        .collect();

    Ok(PageRankResult {
        scores,
        iterations,
        converged,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Orientation;

    fn directed(edges: &[(&'static str, &'static str)]) -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges(edges.iter().copied(), Orientation::Directed)
    }

    fn total(scores: &CentralityMap<&str>) -> f64 {
        scores.values().sum()
    }

    #[test]
    fn empty_graph_returns_empty() {
        let g = AdjacencyGraph::<u32>::default();
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
        assert!(result.converged);
    }

    #[test]
    fn single_node_gets_full_rank() {
        let g = AdjacencyGraph::from_adjacency([("A", vec![])]).expect("closed");
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        assert_eq!(result.scores["A"], 1.0);
        assert!(result.converged);
    }

    #[test]
    fn invalid_config_is_rejected_before_work() {
        let g = AdjacencyGraph::<u32>::default();
        for damping in [0.0, 1.0, -0.5, f64::NAN] {
            let config = PageRankConfig {
                damping,
                ..PageRankConfig::default()
            };
            assert!(
                matches!(
                    page_rank(&g, &config),
                    Err(CentralityError::InvalidDamping(_))
                ),
                "damping {damping}"
            );
        }
        let config = PageRankConfig {
            max_iter: 0,
            ..PageRankConfig::default()
        };
        assert_eq!(
            page_rank(&g, &config).expect_err("zero"),
            CentralityError::ZeroIterations
        );
        let config = PageRankConfig {
            tolerance: -1e-6,
            ..PageRankConfig::default()
        };
        assert!(matches!(
            page_rank(&g, &config),
            Err(CentralityError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn dangling_rank_is_not_lost() {
        let g = directed(&[("A", "B"), ("B", "C")]);
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        assert!(result.converged);
        assert!((total(&result.scores) - 1.0).abs() < 1e-6 * 3.0);
        assert!(result.scores["C"] > result.scores["B"]);
        assert!(result.scores["B"] > result.scores["A"]);
    }

    #[test]
    fn symmetric_cycle_is_uniform() {
        let g = directed(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        for id in ["A", "B", "C"] {
            assert!((result.scores[id] - 1.0 / 3.0).abs() < 1e-9, "{id}");
        }
        // Uniform start is already the fixed point.
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn parallel_edges_weigh_the_share() {
        // A has two edges to B and one to C: B gets twice C's share from A.
        let g = directed(&[("A", "B"), ("A", "B"), ("A", "C"), ("B", "A"), ("C", "A")]);
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        assert!(result.scores["B"] > result.scores["C"]);
    }

    #[test]
    fn self_loop_keeps_rank() {
        let g = directed(&[("A", "A"), ("B", "A")]);
        let result = page_rank(&g, &PageRankConfig::default()).expect("ok");
        assert!(result.scores["A"] > result.scores["B"]);
        assert!((total(&result.scores) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn results_compare_by_value() {
        let g = directed(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "b")]);
        let config = PageRankConfig::default();
        let first = page_rank(&g, &config).expect("valid config");
        let second = page_rank(&g, &config).expect("valid config");
        assert_eq!(first, second);

        let capped = page_rank(
            &g,
            &PageRankConfig {
                max_iter: 1,
                ..config
            },
        )
        .expect("valid config");
        assert_ne!(first, capped);
    }

    #[test]
    fn iteration_cap_returns_last_iterate() {
        let g = directed(&[("A", "B"), ("B", "C")]);
        let config = PageRankConfig {
            max_iter: 1,
            ..PageRankConfig::default()
        };
        let result = page_rank(&g, &config).expect("ok");
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.scores.len(), 3);
    }
}
