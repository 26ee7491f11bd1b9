//! `centra all`: every measure over one load of the graph.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::{BetweennessOpts, EigenvectorOpts, InputArgs, IterationOpts, PageRankOpts};
use crate::config::CentraConfig;
use crate::report::MeasureReport;

#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub betweenness: BetweennessOpts,

    // Applies to both eigenvector and PageRank.
    #[command(flatten)]
    pub iteration: IterationOpts,

    #[command(flatten)]
    pub eigenvector: EigenvectorOpts,

    #[command(flatten)]
    pub pagerank: PageRankOpts,
}

/// Reports in fixed order: betweenness, closeness, eigenvector, pagerank.
pub fn run(args: &AllArgs, config: &CentraConfig) -> Result<Vec<MeasureReport>> {
    let loaded = args.input.load(args.betweenness.weighted)?;
    info!(
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        "computing all measures"
    );

    Ok(vec![
        super::betweenness::compute(&args.input, &args.betweenness, config, &loaded)?,
        super::closeness::compute(&args.input, config, &loaded),
        super::eigenvector::compute(
            &args.input,
            &args.iteration,
            &args.eigenvector,
            config,
            &loaded,
        )?,
        super::pagerank::compute(&args.input, &args.iteration, &args.pagerank, config, &loaded)?,
    ])
}
