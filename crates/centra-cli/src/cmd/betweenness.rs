//! `centra betweenness`

use anyhow::{Context, Result};
use centra_core::metrics::betweenness::{BetweennessConfig, betweenness_centrality};
use clap::Args;
use tracing::info;

use super::{BetweennessOpts, InputArgs, LoadedGraph};
use crate::config::CentraConfig;
use crate::report::MeasureReport;

#[derive(Args, Debug, Clone)]
pub struct BetweennessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub opts: BetweennessOpts,
}

impl BetweennessOpts {
    /// Layer the flags over the `[betweenness]` section.
    pub const fn apply(&self, base: BetweennessConfig, directed: bool) -> BetweennessConfig {
        BetweennessConfig {
            normalized: base.normalized && !self.raw,
            directed,
            parallel: base.parallel || self.parallel,
        }
    }
}

pub fn run(args: &BetweennessArgs, config: &CentraConfig) -> Result<MeasureReport> {
    let loaded = args.input.load(args.opts.weighted)?;
    compute(&args.input, &args.opts, config, &loaded)
}

/// Betweenness report for an already-loaded graph.
pub fn compute(
    input: &InputArgs,
    opts: &BetweennessOpts,
    config: &CentraConfig,
    loaded: &LoadedGraph,
) -> Result<MeasureReport> {
    let bc = opts.apply(config.betweenness, input.directed);
    info!(
        normalized = bc.normalized,
        parallel = bc.parallel,
        weighted = loaded.weights.is_some(),
        "computing betweenness"
    );

    let scores = betweenness_centrality(&loaded.graph, &bc, loaded.weights.as_ref())
        .context("betweenness centrality failed")?;
    Ok(input.report(config, "betweenness", &loaded.graph, &scores))
}
