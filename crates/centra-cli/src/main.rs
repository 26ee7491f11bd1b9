#![forbid(unsafe_code)]

mod cmd;
mod config;
mod load;
mod output;
mod report;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "centra: centrality measures for edge-list graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ./centra.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank nodes by shortest paths through them",
        after_help = "EXAMPLES:\n    # Top 10 brokers of an undirected graph\n    centra betweenness --edges graph.txt\n\n    # Weighted, unnormalized, on all cores\n    centra betweenness --edges weighted.txt --weighted --raw --parallel"
    )]
    Betweenness(cmd::betweenness::BetweennessArgs),

    #[command(
        about = "Rank nodes by hop distance to the rest of the graph",
        after_help = "EXAMPLES:\n    centra closeness --edges graph.txt --top 5"
    )]
    Closeness(cmd::closeness::ClosenessArgs),

    #[command(
        about = "Rank nodes by eigenvector centrality",
        after_help = "EXAMPLES:\n    centra eigenvector --edges graph.txt --seed 7 --max-iter 500"
    )]
    Eigenvector(cmd::eigenvector::EigenvectorArgs),

    #[command(
        about = "Rank nodes by PageRank over out-links",
        after_help = "EXAMPLES:\n    centra pagerank --edges links.txt --directed --damping 0.9"
    )]
    Pagerank(cmd::pagerank::PageRankArgs),

    #[command(
        about = "Run every measure on one graph",
        after_help = "EXAMPLES:\n    # Compare each measure's top 10 with known hub nodes\n    centra all --edges graph.txt --reference 0,107,348,414\n\n    # Emit machine-readable output\n    centra all --edges graph.txt --json"
    )]
    All(cmd::all::AllArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CENTRA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "centra=debug,centra_core=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("CENTRA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let cwd = env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &cwd)?;
    config.validate()?;
    debug!(?config, "effective config");

    let mode = cli.output_mode();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Betweenness(args) => {
            let report = cmd::betweenness::run(args, &config)?;
            output::render(mode, &mut out, &report, output::write_report)?;
        }
        Commands::Closeness(args) => {
            let report = cmd::closeness::run(args, &config)?;
            output::render(mode, &mut out, &report, output::write_report)?;
        }
        Commands::Eigenvector(args) => {
            let report = cmd::eigenvector::run(args, &config)?;
            output::render(mode, &mut out, &report, output::write_report)?;
        }
        Commands::Pagerank(args) => {
            let report = cmd::pagerank::run(args, &config)?;
            output::render(mode, &mut out, &report, output::write_report)?;
        }
        Commands::All(args) => {
            let reports = cmd::all::run(args, &config)?;
            output::render(mode, &mut out, reports.as_slice(), output::write_reports)?;
        }
    }

    out.flush()?;
    Ok(())
}
