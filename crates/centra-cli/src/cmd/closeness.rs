//! `centra closeness`

use anyhow::Result;
use centra_core::metrics::closeness::closeness_centrality;
use clap::Args;
use tracing::info;

use super::{InputArgs, LoadedGraph};
use crate::config::CentraConfig;
use crate::report::MeasureReport;

#[derive(Args, Debug, Clone)]
pub struct ClosenessArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &ClosenessArgs, config: &CentraConfig) -> Result<MeasureReport> {
    let loaded = args.input.load(false)?;
    Ok(compute(&args.input, config, &loaded))
}

/// Closeness report for an already-loaded graph.
pub fn compute(input: &InputArgs, config: &CentraConfig, loaded: &LoadedGraph) -> MeasureReport {
    info!(nodes = loaded.graph.node_count(), "computing closeness");
    let scores = closeness_centrality(&loaded.graph);
    input.report(config, "closeness", &loaded.graph, &scores)
}
