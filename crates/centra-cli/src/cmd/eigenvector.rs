//! `centra eigenvector`

use anyhow::{Context, Result};
use centra_core::metrics::CentralityMap;
use centra_core::metrics::eigenvector::{EigenvectorConfig, eigenvector_centrality};
use clap::Args;
use tracing::info;

use super::{EigenvectorOpts, InputArgs, IterationOpts, LoadedGraph};
use crate::config::CentraConfig;
use crate::report::MeasureReport;

#[derive(Args, Debug, Clone)]
pub struct EigenvectorArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub iteration: IterationOpts,

    #[command(flatten)]
    pub opts: EigenvectorOpts,
}

impl EigenvectorOpts {
    /// Layer the flags over the `[eigenvector]` section.
    pub fn apply(&self, base: EigenvectorConfig, iteration: &IterationOpts) -> EigenvectorConfig {
        EigenvectorConfig {
            max_iter: iteration.max_iter.unwrap_or(base.max_iter),
            tolerance: iteration.tolerance.unwrap_or(base.tolerance),
            seed: self.seed.unwrap_or(base.seed),
            shift: self.shift.unwrap_or(base.shift),
        }
    }
}

pub fn run(args: &EigenvectorArgs, config: &CentraConfig) -> Result<MeasureReport> {
    let loaded = args.input.load(false)?;
    compute(&args.input, &args.iteration, &args.opts, config, &loaded)
}

/// Eigenvector report for an already-loaded graph.
///
/// The graph goes through its dense 0/1 adjacency matrix; scores map back
/// to node ids by row.
pub fn compute(
    input: &InputArgs,
    iteration: &IterationOpts,
    opts: &EigenvectorOpts,
    config: &CentraConfig,
    loaded: &LoadedGraph,
) -> Result<MeasureReport> {
    let ev = opts.apply(config.eigenvector, iteration);
    info!(max_iter = ev.max_iter, seed = ev.seed, shift = ev.shift, "computing eigenvector");

    let matrix = loaded.graph.adjacency_matrix();
    let result = eigenvector_centrality(&matrix, &ev).context("invalid eigenvector settings")?;

    let scores: CentralityMap<_> = loaded
        .graph
        .nodes()
        .copied()
        .zip(result.scores.iter().copied())
        .collect();

    let mut report = input.report(config, "eigenvector", &loaded.graph, &scores);
    report.iterations = Some(result.iterations);
    report.converged = Some(result.converged);
    Ok(report)
}
