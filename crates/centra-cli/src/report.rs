//! Ranking and reference-set comparison of centrality scores.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use centra_core::metrics::CentralityMap;
use serde::Serialize;

use crate::load::NodeId;

/// One ranked node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub node: NodeId,
    pub score: f64,
}

/// Top-ranked nodes checked against a known reference set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceComparison {
    /// Reference nodes that made the top list.
    pub matched: Vec<NodeId>,
    /// Reference nodes that did not.
    pub missed: Vec<NodeId>,
    /// Top-list nodes outside the reference set.
    pub unexpected: Vec<NodeId>,
}

/// Everything printed for one measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureReport {
    pub measure: &'static str,
    pub nodes: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,
    pub top: Vec<Ranked>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceComparison>,
}

/// The `k` highest-scoring nodes: score descending, ties by id ascending.
pub fn top_k(scores: &CentralityMap<NodeId>, k: NonZeroUsize) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = scores
        .iter()
        .map(|(&node, &score)| Ranked { node, score })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.node.cmp(&b.node)));
    ranked.truncate(k.get());
    ranked
}

/// Compare a top list with the reference set. All three lists are sorted.
pub fn compare_with_reference(top: &[Ranked], reference: &[NodeId]) -> ReferenceComparison {
    let reference: BTreeSet<NodeId> = reference.iter().copied().collect();
    let found: BTreeSet<NodeId> = top.iter().map(|r| r.node).collect();

    ReferenceComparison {
        matched: reference.intersection(&found).copied().collect(),
        missed: reference.difference(&found).copied().collect(),
        unexpected: found.difference(&reference).copied().collect(),
    }
}
