//! Construction of [`AdjacencyGraph`] values.
//!
//! # Overview
//!
//! Two entry points:
//!
//! - [`AdjacencyGraph::from_adjacency`] takes a ready-made mapping from node
//!   to neighbor list and checks the closed-universe invariant.
//! - [`AdjacencyGraph::from_edges`] takes an edge list and an
//!   [`Orientation`]. Undirected input stores each edge in both directions
//!   except self loops, which are stored once.
//!
//! In both cases node order is order of first appearance.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CentralityError, Result};
use crate::graph::AdjacencyGraph;

/// How an edge list should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Every `(u, v)` also implies `(v, u)`.
    #[default]
    Undirected,
    /// Edges are stored exactly as given.
    Directed,
}

impl Orientation {
    /// `true` for [`Orientation::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl<N> AdjacencyGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Build a graph from a node-to-neighbors mapping.
    ///
    /// Keys become nodes in iteration order. A key that appears more than
    /// once has its neighbor lists concatenated.
    ///
    /// # Errors
    ///
    /// Returns [`CentralityError::UnknownNeighbor`] if a neighbor list names
    /// a node that is not itself a key.
    #[instrument(skip(adjacency))]
    pub fn from_adjacency<I, J>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let entries: Vec<(N, Vec<N>)> = adjacency
            .into_iter()
            .map(|(node, nbrs)| (node, nbrs.into_iter().collect()))
            .collect();

        let mut out = Self::default();
        for (node, _) in &entries {
            out.intern(node);
        }

        for (node, nbrs) in entries {
            let from = out.node_map[&node];
            for nbr in nbrs {
                let Some(&to) = out.node_map.get(&nbr) else {
                    return Err(CentralityError::UnknownNeighbor {
                        node: format!("{node:?}"),
                        neighbor: format!("{nbr:?}"),
                    });
                };
                out.graph.add_edge(from, to, ());
            }
        }

        debug!(
            nodes = out.node_count(),
            entries = out.edge_count(),
            "adjacency graph built"
        );
        Ok(out)
    }

    /// Build a graph from an edge list.
    ///
    /// Every endpoint becomes a node. For [`Orientation::Undirected`], edge
    /// `(u, v)` is stored as `u -> v` and, when `u != v`, also `v -> u`.
    #[must_use]
    #[instrument(skip(edges))]
    pub fn from_edges<I>(edges: I, orientation: Orientation) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut out = Self::default();
        for (u, v) in edges {
            let ui = out.intern(&u);
            let vi = out.intern(&v);
            out.graph.add_edge(ui, vi, ());
            if !orientation.is_directed() && ui != vi {
                out.graph.add_edge(vi, ui, ());
            }
        }

        debug!(
            nodes = out.node_count(),
            entries = out.edge_count(),
            ?orientation,
            "edge-list graph built"
        );
        out
    }

    /// Add `node` if absent and return its index.
    fn intern(&mut self, node: &N) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node.clone(), idx);
        idx
    }
}

impl<N> AdjacencyGraph<N> {
    /// Wrap an existing petgraph `DiGraph`, using its node weights as ids.
    ///
    /// # Errors
    ///
    /// Returns [`CentralityError::DuplicateNode`] if two nodes carry the
    /// same weight.
    pub fn from_digraph<E>(source: &DiGraph<N, E>) -> Result<Self>
    where
        N: Clone + Eq + Hash + Debug,
    {
        let mut node_map = HashMap::with_capacity(source.node_count());
        for idx in source.node_indices() {
            let id = &source[idx];
            if node_map.insert(id.clone(), idx).is_some() {
                return Err(CentralityError::DuplicateNode(format!("{id:?}")));
            }
        }
        let graph = source.map(|_, n| n.clone(), |_, _| ());
        Ok(Self { graph, node_map })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
