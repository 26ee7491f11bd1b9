//! `centra.toml` loading.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use centra_core::metrics::betweenness::BetweennessConfig;
use centra_core::metrics::eigenvector::EigenvectorConfig;
use centra_core::metrics::pagerank::PageRankConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "centra.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentraConfig {
    pub betweenness: BetweennessConfig,
    pub eigenvector: EigenvectorConfig,
    pub pagerank: PageRankConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of top-ranked nodes to print.
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

const fn default_top() -> usize {
    10
}

impl CentraConfig {
    /// Reject values the engine would refuse, naming the section.
    pub fn validate(&self) -> Result<()> {
        self.eigenvector
            .validate()
            .context("invalid [eigenvector] settings")?;
        self.pagerank
            .validate()
            .context("invalid [pagerank] settings")?;
        if self.report.top == 0 {
            bail!("invalid [report] settings: top must be a positive integer");
        }
        Ok(())
    }

    /// Configured report size.
    pub fn top(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.report.top).unwrap_or(NonZeroUsize::MIN)
    }
}

/// Load the explicit config file, or `centra.toml` in `cwd` if it exists,
/// or defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<CentraConfig> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                return Ok(CentraConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<CentraConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
