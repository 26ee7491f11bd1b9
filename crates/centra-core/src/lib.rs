#![forbid(unsafe_code)]
//! centra-core library.
//!
//! Centrality measures over in-memory graphs: betweenness (Brandes),
//! closeness, eigenvector and PageRank.
//!
//! # Conventions
//!
//! - **Errors**: Fallible operations return [`error::Result`]. Every error is
//!   an argument error raised before computation starts; degenerate inputs
//!   and non-convergence are reported through the result types.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`). The library
//!   never logs above `debug` and never installs a subscriber.
//! - **Configuration**: Each metric takes an explicit config struct with
//!   serde defaults; there is no global state.

pub mod error;
pub mod graph;
pub mod metrics;
mod paths;

pub use error::{CentralityError, Result};
pub use graph::{AdjacencyGraph, EdgeWeights, Orientation};
pub use metrics::CentralityMap;
pub use metrics::betweenness::{BetweennessConfig, betweenness_centrality};
pub use metrics::closeness::closeness_centrality;
pub use metrics::eigenvector::{EigenvectorConfig, EigenvectorResult, eigenvector_centrality};
pub use metrics::pagerank::{PageRankConfig, PageRankResult, page_rank};
