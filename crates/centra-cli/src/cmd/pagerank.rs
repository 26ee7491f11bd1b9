//! `centra pagerank`

use anyhow::{Context, Result};
use centra_core::metrics::pagerank::{PageRankConfig, page_rank};
use clap::Args;
use tracing::info;

use super::{InputArgs, IterationOpts, LoadedGraph, PageRankOpts};
use crate::config::CentraConfig;
use crate::report::MeasureReport;

#[derive(Args, Debug, Clone)]
pub struct PageRankArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub iteration: IterationOpts,

    #[command(flatten)]
    pub opts: PageRankOpts,
}

impl PageRankOpts {
    /// Layer the flags over the `[pagerank]` section.
    pub fn apply(&self, base: PageRankConfig, iteration: &IterationOpts) -> PageRankConfig {
        PageRankConfig {
            damping: self.damping.unwrap_or(base.damping),
            tolerance: iteration.tolerance.unwrap_or(base.tolerance),
            max_iter: iteration.max_iter.unwrap_or(base.max_iter),
        }
    }
}

pub fn run(args: &PageRankArgs, config: &CentraConfig) -> Result<MeasureReport> {
    let loaded = args.input.load(false)?;
    compute(&args.input, &args.iteration, &args.opts, config, &loaded)
}

/// PageRank report for an already-loaded graph.
pub fn compute(
    input: &InputArgs,
    iteration: &IterationOpts,
    opts: &PageRankOpts,
    config: &CentraConfig,
    loaded: &LoadedGraph,
) -> Result<MeasureReport> {
    let pr = opts.apply(config.pagerank, iteration);
    info!(damping = pr.damping, max_iter = pr.max_iter, "computing pagerank");

    let result = page_rank(&loaded.graph, &pr).context("invalid pagerank settings")?;

    let mut report = input.report(config, "pagerank", &loaded.graph, &result.scores);
    report.iterations = Some(result.iterations);
    report.converged = Some(result.converged);
    Ok(report)
}
