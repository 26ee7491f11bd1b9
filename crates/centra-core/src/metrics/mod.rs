//! Centrality metrics.
//!
//! # Overview
//!
//! Each metric answers a different question about node importance:
//!
//! - **Betweenness centrality** (`betweenness`): Which nodes sit on the most
//!   shortest paths between other pairs?
//! - **Closeness centrality** (`closeness`): Which nodes are, on average, the
//!   fewest hops from everything they can reach?
//! - **Eigenvector centrality** (`eigenvector`): Which nodes are connected to
//!   other high-centrality nodes?
//! - **PageRank** (`pagerank`): Where does a random surfer who follows
//!   out-links, and occasionally teleports, spend its time?
//!
//! # Usage
//!
//! The graph-based metrics take an [`AdjacencyGraph`] and return a
//! [`CentralityMap`] keyed by node id. Eigenvector centrality takes a dense
//! adjacency matrix and returns scores aligned with its rows.
//!
//! ```rust
//! use centra_core::graph::{AdjacencyGraph, Orientation};
//! use centra_core::metrics::betweenness::{BetweennessConfig, betweenness_centrality};
//! use centra_core::metrics::closeness::closeness_centrality;
//! use centra_core::metrics::eigenvector::{EigenvectorConfig, eigenvector_centrality};
//! use centra_core::metrics::pagerank::{PageRankConfig, page_rank};
//!
//! let g = AdjacencyGraph::from_edges(
//!     [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
//!     Orientation::Undirected,
//! );
//!
//! let bc = betweenness_centrality(&g, &BetweennessConfig::default(), None)?;
//! let cc = closeness_centrality(&g);
//! let ev = eigenvector_centrality(&g.adjacency_matrix(), &EigenvectorConfig::default())?;
//! let pr = page_rank(&g, &PageRankConfig::default())?;
//!
//! assert!(bc["c"] > bc["a"]);
//! assert!(cc["c"] > cc["d"]);
//! assert!(ev.scores[2] > ev.scores[0]);
//! assert!(pr.scores["c"] > pr.scores["a"]);
//! # Ok::<(), centra_core::error::CentralityError>(())
//! ```
//!
//! [`AdjacencyGraph`]: crate::graph::AdjacencyGraph

use std::collections::HashMap;

pub mod betweenness;
pub mod closeness;
pub mod eigenvector;
pub mod pagerank;

/// Per-node scores keyed by node id.
pub type CentralityMap<N> = HashMap<N, f64>;
