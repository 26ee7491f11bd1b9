//! Subcommand arguments and handlers.
//!
//! Each measure has its own module with a `run` entry point returning a
//! [`MeasureReport`]. Argument groups shared between subcommands live here
//! and are flattened into each subcommand's `Args`.

pub mod all;
pub mod betweenness;
pub mod closeness;
pub mod eigenvector;
pub mod pagerank;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use centra_core::graph::{AdjacencyGraph, EdgeWeights, Orientation};
use centra_core::metrics::CentralityMap;
use clap::Args;

use crate::config::CentraConfig;
use crate::load::{NodeId, load_edge_list};
use crate::report::{MeasureReport, compare_with_reference, top_k};

/// Graph input and report shape, common to every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Edge-list file: one whitespace-separated pair of integer ids per line.
    #[arg(long, value_name = "FILE")]
    pub edges: PathBuf,

    /// Treat each line as a directed edge `from -> to`.
    #[arg(long)]
    pub directed: bool,

    /// Number of top-ranked nodes to report (overrides `[report] top`).
    #[arg(long, value_name = "K")]
    pub top: Option<NonZeroUsize>,

    /// Comma-separated reference node ids to compare the top list against.
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub reference: Vec<NodeId>,
}

/// A loaded graph plus its optional weights.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: AdjacencyGraph<NodeId>,
    pub weights: Option<EdgeWeights<NodeId>>,
}

impl InputArgs {
    pub const fn orientation(&self) -> Orientation {
        if self.directed {
            Orientation::Directed
        } else {
            Orientation::Undirected
        }
    }

    /// Read the edge list, with a weight column if `weighted`.
    pub fn load(&self, weighted: bool) -> Result<LoadedGraph> {
        let list = load_edge_list(&self.edges, weighted)?;
        let orientation = self.orientation();
        Ok(LoadedGraph {
            graph: list.to_graph(orientation),
            weights: list.edge_weights(orientation),
        })
    }

    /// Rank `scores` and assemble the report for `measure`.
    pub fn report(
        &self,
        config: &CentraConfig,
        measure: &'static str,
        graph: &AdjacencyGraph<NodeId>,
        scores: &CentralityMap<NodeId>,
    ) -> MeasureReport {
        let k = self.top.unwrap_or_else(|| config.top());
        let top = top_k(scores, k);
        let reference =
            (!self.reference.is_empty()).then(|| compare_with_reference(&top, &self.reference));

        MeasureReport {
            measure,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            iterations: None,
            converged: None,
            top,
            reference,
        }
    }
}

/// Betweenness switches.
#[derive(Args, Debug, Clone, Default)]
pub struct BetweennessOpts {
    /// Report raw pair counts instead of normalized scores.
    #[arg(long)]
    pub raw: bool,

    /// Read a third column as edge weight (shortest paths by total weight).
    #[arg(long)]
    pub weighted: bool,

    /// Spread source nodes over all cores.
    #[arg(long)]
    pub parallel: bool,
}

/// Iteration limits for the power-iteration measures.
#[derive(Args, Debug, Clone, Default)]
pub struct IterationOpts {
    /// Maximum number of iterations.
    #[arg(long, value_name = "N")]
    pub max_iter: Option<usize>,

    /// Convergence tolerance.
    #[arg(long, value_name = "EPS")]
    pub tolerance: Option<f64>,
}

/// Eigenvector-specific settings.
#[derive(Args, Debug, Clone, Default)]
pub struct EigenvectorOpts {
    /// Seed for the random start vector.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Identity shift added during iteration (1 converges on bipartite graphs).
    #[arg(long)]
    pub shift: Option<f64>,
}

/// PageRank-specific settings.
#[derive(Args, Debug, Clone, Default)]
pub struct PageRankOpts {
    /// Probability of following an out-link instead of teleporting.
    #[arg(long)]
    pub damping: Option<f64>,
}
