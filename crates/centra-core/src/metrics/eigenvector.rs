//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes based on the idea that connections to
//! high-scoring nodes contribute more to a node's score. It is the dominant
//! eigenvector of the adjacency matrix, scaled to unit L2 norm.
//!
//! # Algorithm
//!
//! 1. Start from a seeded random vector with entries in `[0.5, 1.5)`,
//!    normalized. Never the uniform vector.
//! 2. `y = A x`. If `||y|| < 1e-10` the matrix annihilates the iterate (for
//!    example a graph with no edges) and the result is the zero vector.
//! 3. `x' = (y + shift * x) / ||y + shift * x||`. The default `shift = 0`
//!    is plain `A x` iteration, which flips between two vectors on
//!    bipartite graphs and never converges there. `shift = 1` iterates
//!    `A + I` instead: same dominant eigenvector, no `-lambda` partner.
//! 4. Stop when `||x' - x|| < tolerance`, or after `max_iter` steps with the
//!    last iterate.
//! 5. If any entry is negative, flip the sign of the whole vector.
//!
//! # Regular graphs
//!
//! A symmetric matrix whose rows all have the same sum (complete graphs,
//! cycles, the empty graph) has the uniform vector as its exact dominant
//! eigenvector. [`regular_graph_scores`] detects this case and the iteration
//! is skipped, so these inputs get exactly `1/sqrt(n)` everywhere instead of
//! a numerically noisy approximation.

use nalgebra::{DMatrix, DVector};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CentralityError, Result};

/// Iterates with an L2 norm below this are treated as zero.
pub const NILPOTENT_NORM: f64 = 1e-10;

/// Row sums closer than this count as equal for the regular-graph check.
const ROW_SUM_EPSILON: f64 = 1e-12;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
    /// Convergence threshold on the L2 norm of the change in scores.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Seed for the random start vector.
    /// Default: 42.
    pub seed: u64,
    /// Multiple of the identity added to the matrix during iteration.
    /// Default: 0.0 (plain `A x` power iteration). Use 1.0 to converge on
    /// bipartite graphs.
    pub shift: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-6,
            seed: 42,
            shift: 0.0,
        }
    }
}

impl EigenvectorConfig {
    /// Check that every field is in range.
    ///
    /// # Errors
    ///
    /// Returns the matching [`CentralityError`] variant for a zero iteration
    /// cap, a non-positive tolerance, or a negative shift.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(CentralityError::ZeroIterations);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CentralityError::InvalidTolerance(self.tolerance));
        }
        if !(self.shift.is_finite() && self.shift >= 0.0) {
            return Err(CentralityError::InvalidShift(self.shift));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvectorResult {
    /// Scores aligned with the matrix rows.
    pub scores: Vec<f64>,
    /// Number of iterations performed (0 when short-circuited).
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
    /// Whether the regular-graph special case produced the scores.
    pub regular: bool,
}

impl EigenvectorResult {
    fn exact(scores: Vec<f64>, regular: bool) -> Self {
        Self {
            scores,
            iterations: 0,
            converged: true,
            regular,
        }
    }
}

// ---------------------------------------------------------------------------
// Eigenvector centrality
// ---------------------------------------------------------------------------

/// Compute eigenvector centrality of the graph with adjacency `matrix`.
///
/// # Errors
///
/// Returns [`CentralityError::NonSquareMatrix`] for a non-square matrix and
/// the [`EigenvectorConfig::validate`] errors for an out-of-range config.
/// Both are checked before any iteration.
#[instrument(skip(matrix), fields(n = matrix.nrows()))]
pub fn eigenvector_centrality(
    matrix: &DMatrix<f64>,
    config: &EigenvectorConfig,
) -> Result<EigenvectorResult> {
    if !matrix.is_square() {
        return Err(CentralityError::NonSquareMatrix {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    config.validate()?;

    let n = matrix.nrows();
    if n == 0 {
        return Ok(EigenvectorResult::exact(Vec::new(), false));
    }

    if let Some(scores) = regular_graph_scores(matrix) {
        debug!(n, "regular graph, uniform eigenvector");
        return Ok(EigenvectorResult::exact(scores, true));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut x = DVector::from_fn(n, |_, _| rng.gen_range(0.5..1.5));
    x /= x.norm();

    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..config.max_iter {
        iterations = iter + 1;

        let y = matrix * &x;
        if y.norm() < NILPOTENT_NORM {
            debug!(iterations, "iterate annihilated, returning zero vector");
            return Ok(EigenvectorResult {
                scores: vec![0.0; n],
                iterations,
                converged: true,
                regular: false,
            });
        }

        let mut next = if config.shift > 0.0 {
            y + &x * config.shift
        } else {
            y
        };
        let norm = next.norm();
        if norm < NILPOTENT_NORM {
            // Shift cancelled the step exactly; nothing meaningful to follow.
            break;
        }
        next /= norm;

        let diff = (&next - &x).norm();
        x = next;

        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    if x.iter().any(|&v| v < 0.0) {
        x.neg_mut();
    }

    debug!(iterations, converged, "eigenvector centrality computed");

    Ok(EigenvectorResult {
        scores: x.iter().copied().collect(),
        iterations,
        converged,
        regular: false,
    })
}

/// Uniform `1/sqrt(n)` scores if `matrix` is symmetric with equal row sums.
///
/// Every vertex then has the same degree and the all-ones vector is an
/// eigenvector for the largest eigenvalue, so no iteration is needed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn regular_graph_scores(matrix: &DMatrix<f64>) -> Option<Vec<f64>> {
    let n = matrix.nrows();
    if n == 0 || !matrix.is_square() || matrix != &matrix.transpose() {
        return None;
    }

    let first = matrix.row(0).sum();
    let regular = (1..n).all(|i| (matrix.row(i).sum() - first).abs() <= ROW_SUM_EPSILON);
    regular.then(|| vec![1.0 / (n as f64).sqrt(); n])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> DMatrix<f64> {
        let n = rows.len();
        DMatrix::from_fn(n, rows.first().map_or(0, |r| r.len()), |i, j| rows[i][j])
    }

    #[test]
    fn empty_matrix_returns_empty() {
        let result = eigenvector_centrality(&DMatrix::zeros(0, 0), &EigenvectorConfig::default())
            .expect("ok");
        assert!(result.scores.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn non_square_is_rejected() {
        let err = eigenvector_centrality(&DMatrix::zeros(2, 3), &EigenvectorConfig::default())
            .expect_err("2x3");
        assert_eq!(err, CentralityError::NonSquareMatrix { rows: 2, cols: 3 });
    }

    #[test]
    fn config_is_validated() {
        let m = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let bad = EigenvectorConfig {
            max_iter: 0,
            ..EigenvectorConfig::default()
        };
        assert_eq!(
            eigenvector_centrality(&m, &bad).expect_err("zero iterations"),
            CentralityError::ZeroIterations
        );
        let bad = EigenvectorConfig {
            tolerance: 0.0,
            ..EigenvectorConfig::default()
        };
        assert!(eigenvector_centrality(&m, &bad).is_err());
        let bad = EigenvectorConfig {
            shift: -1.0,
            ..EigenvectorConfig::default()
        };
        assert!(eigenvector_centrality(&m, &bad).is_err());
    }

    #[test]
    fn triangle_is_regular() {
        let m = matrix(&[&[0.0, 1.0, 1.0], &[1.0, 0.0, 1.0], &[1.0, 1.0, 0.0]]);
        let result = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        assert!(result.regular);
        for s in &result.scores {
            assert!((s - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn edgeless_graph_is_regular() {
        let result =
            eigenvector_centrality(&DMatrix::zeros(4, 4), &EigenvectorConfig::default()).expect("ok");
        assert!(result.regular);
        assert!(result.scores.iter().all(|s| (s - 0.5).abs() < 1e-12));
    }

    #[test]
    fn shifted_star_center_highest_eigenvector() {
        let m = matrix(&[
            &[0.0, 1.0, 1.0, 1.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
        ]);
        let config = EigenvectorConfig {
            shift: 1.0,
            ..EigenvectorConfig::default()
        };
        let result = eigenvector_centrality(&m, &config).expect("ok");
        assert!(result.converged);
        assert!(!result.regular);
        // Dominant eigenvector of K_{1,3}: center sqrt(3) times each leaf.
        let leaf = result.scores[1];
        assert!((result.scores[0] - 3.0_f64.sqrt() * leaf).abs() < 1e-5);
        assert!((result.scores[2] - leaf).abs() < 1e-5);
        assert!((result.scores[3] - leaf).abs() < 1e-5);
    }

    #[test]
    fn nilpotent_matrix_returns_zero_vector() {
        // Single edge 0 -> 1: the first step leaves [1, 0], the second
        // maps it to zero.
        let m = matrix(&[&[0.0, 1.0], &[0.0, 0.0]]);
        let result = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        assert_eq!(result.scores, vec![0.0, 0.0]);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn default_is_plain_power_iteration() {
        assert!(EigenvectorConfig::default().shift.abs() < f64::EPSILON);

        // K_{1,3} oscillates under plain iteration: the cap is reached.
        let m = matrix(&[
            &[0.0, 1.0, 1.0, 1.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
        ]);
        let result = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        assert!(!result.converged);
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn same_seed_same_scores() {
        let m = matrix(&[
            &[0.0, 1.0, 0.0, 0.0],
            &[1.0, 0.0, 1.0, 1.0],
            &[0.0, 1.0, 0.0, 1.0],
            &[0.0, 1.0, 1.0, 0.0],
        ]);
        let a = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        let b = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        assert_eq!(a, b);
    }

    #[test]
    fn scores_are_non_negative() {
        let m = matrix(&[&[0.0, 1.0, 1.0], &[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]]);
        let result = eigenvector_centrality(&m, &EigenvectorConfig::default()).expect("ok");
        assert!(result.scores.iter().all(|&s| s >= 0.0), "{:?}", result.scores);
    }

    #[test]
    fn regular_check_requires_symmetry() {
        // Directed 3-cycle: equal row sums but not symmetric.
        let m = matrix(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]]);
        assert!(regular_graph_scores(&m).is_none());
    }
}
