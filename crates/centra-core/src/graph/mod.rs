//! Graph representation consumed by the centrality metrics.
//!
//! # Overview
//!
//! [`AdjacencyGraph`] is an adjacency mapping: every node owns an ordered
//! list of out-neighbors. Undirected graphs store both directions of every
//! edge; directed graphs store only the edges that exist. Edge multiplicity
//! is kept literally, so a neighbor listed twice contributes two shortest
//! paths and two PageRank shares.
//!
//! The mapping is backed by a [`petgraph`] `DiGraph` plus an id-to-index
//! map. Node indices are dense (`0..n`) and follow key insertion order, which
//! is also the order the metrics visit sources in.
//!
//! Construction lives in [`build`]; it enforces the closed-universe
//! invariant (every neighbor is also a key) once, so the metrics can index
//! without further checks.

pub mod build;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use nalgebra::DMatrix;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::error::{CentralityError, Result};

pub use build::Orientation;

/// Optional edge weights keyed by ordered node pair `(from, to)`.
///
/// Edges without an entry weigh `1.0`. Entries for pairs that are not edges
/// of the graph are ignored.
pub type EdgeWeights<N> = HashMap<(N, N), f64>;

/// A node-identifier-keyed adjacency mapping.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    pub(crate) graph: DiGraph<N, ()>,
    pub(crate) node_map: HashMap<N, NodeIndex>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }
}

impl<N> AdjacencyGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Number of nodes (keys of the mapping).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored directed adjacency entries, counting duplicates.
    ///
    /// An undirected edge between two distinct nodes counts twice.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// `true` if `node` is a key of the mapping.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Out-neighbors of `node` in the order they were listed.
    ///
    /// Returns `None` for a node that is not in the graph.
    #[must_use]
    pub fn neighbors(&self, node: &N) -> Option<Vec<&N>> {
        let &idx = self.node_map.get(node)?;
        // petgraph walks a node's edge list newest-first.
        let mut out: Vec<&N> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| &self.graph[n])
            .collect();
        out.reverse();
        Some(out)
    }

    /// Out-degree of `node`, counting repeated neighbors.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> Option<usize> {
        let &idx = self.node_map.get(node)?;
        Some(self.graph.edges_directed(idx, Direction::Outgoing).count())
    }

    /// Dense 0/1 adjacency matrix in node order.
    ///
    /// Entry `(i, j)` is `1.0` when at least one edge `i -> j` exists;
    /// parallel edges are not summed.
    #[must_use]
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.graph.node_count();
        let mut matrix = DMatrix::zeros(n, n);
        for edge in self.graph.edge_references() {
            matrix[(edge.source().index(), edge.target().index())] = 1.0;
        }
        matrix
    }

    /// Node identifier at a dense index.
    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.graph[NodeIndex::new(idx)]
    }

    /// Out-neighbor indices of the node at `idx`, repeated per parallel edge.
    pub(crate) fn out_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(idx), Direction::Outgoing)
            .map(NodeIndex::index)
    }

    /// Out-edges of the node at `idx` as `(edge_index, target_index)` pairs.
    pub(crate) fn out_edges(&self, idx: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(idx), Direction::Outgoing)
            .map(|e| (e.id().index(), e.target().index()))
    }

    /// Resolve optional weights into a table indexed by edge index.
    ///
    /// # Errors
    ///
    /// Returns [`CentralityError::InvalidWeight`] if any weight that applies
    /// to an edge of this graph is negative or not finite.
    pub(crate) fn weight_table(&self, weights: &EdgeWeights<N>) -> Result<Vec<f64>> {
        let mut table = vec![1.0; self.graph.edge_count()];
        for edge in self.graph.edge_references() {
            let from = &self.graph[edge.source()];
            let to = &self.graph[edge.target()];
            if let Some(&w) = weights.get(&(from.clone(), to.clone())) {
                if !w.is_finite() || w < 0.0 {
                    return Err(CentralityError::InvalidWeight {
                        from: format!("{from:?}"),
                        to: format!("{to:?}"),
                        weight: w,
                    });
                }
                table[edge.id().index()] = w;
            }
        }
        Ok(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
