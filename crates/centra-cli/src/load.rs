//! Edge-list loading.
//!
//! One edge per line: two integer node ids separated by whitespace, plus a
//! third numeric column when weights are requested. Blank lines and lines
//! starting with `#` are skipped. Any other malformed line fails the whole
//! load with its 1-based line number.

use std::path::Path;

use anyhow::{Context, Result, bail};
use centra_core::graph::{AdjacencyGraph, EdgeWeights, Orientation};
use tracing::debug;

/// Node identifier in edge-list files.
pub type NodeId = u64;

/// Parsed edge list, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub edges: Vec<(NodeId, NodeId)>,
    /// One weight per edge when loaded with weights.
    pub weights: Option<Vec<f64>>,
}

impl EdgeList {
    /// Build the graph in the requested orientation.
    pub fn to_graph(&self, orientation: Orientation) -> AdjacencyGraph<NodeId> {
        AdjacencyGraph::from_edges(self.edges.iter().copied(), orientation)
    }

    /// Weight lookup for the graph built by [`EdgeList::to_graph`].
    ///
    /// Undirected edges get the weight in both directions. When an edge is
    /// listed more than once, the last weight wins.
    pub fn edge_weights(&self, orientation: Orientation) -> Option<EdgeWeights<NodeId>> {
        let weights = self.weights.as_ref()?;
        let mut table = EdgeWeights::with_capacity(weights.len() * 2);
        for (&(u, v), &w) in self.edges.iter().zip(weights) {
            table.insert((u, v), w);
            if !orientation.is_directed() {
                table.insert((v, u), w);
            }
        }
        Some(table)
    }
}

/// Parse edge-list text.
pub fn parse_edge_list(text: &str, weighted: bool) -> Result<EdgeList> {
    let mut edges = Vec::new();
    let mut weights = weighted.then(Vec::new);

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let expected = if weighted { 3 } else { 2 };
        if fields.len() != expected {
            let shape = if weighted {
                "<from> <to> <weight>"
            } else {
                "<from> <to>"
            };
            bail!(
                "line {line_no}: expected `{shape}`, found {} field(s): {line:?}",
                fields.len()
            );
        }

        let from = parse_node(fields[0], line_no)?;
        let to = parse_node(fields[1], line_no)?;
        edges.push((from, to));

        if let Some(weights) = weights.as_mut() {
            let weight: f64 = fields[2]
                .parse()
                .with_context(|| format!("line {line_no}: invalid weight {:?}", fields[2]))?;
            weights.push(weight);
        }
    }

    Ok(EdgeList { edges, weights })
}

fn parse_node(field: &str, line_no: usize) -> Result<NodeId> {
    field
        .parse()
        .with_context(|| format!("line {line_no}: invalid node id {field:?}"))
}

/// Read and parse an edge-list file.
pub fn load_edge_list(path: &Path, weighted: bool) -> Result<EdgeList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let list = parse_edge_list(&text, weighted)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), edges = list.edges.len(), weighted, "loaded edge list");
    Ok(list)
}
