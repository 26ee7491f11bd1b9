//! Single-source shortest paths with path counting, and Brandes' dependency
//! accumulation over them.
//!
//! # Overview
//!
//! Betweenness centrality needs, for every source `s`, the shortest-path DAG
//! rooted at `s` annotated with path multiplicities:
//!
//! - `stack`: nodes in non-decreasing distance order, each once.
//! - `predecessors[w]`: nodes immediately before `w` on some shortest path.
//! - `sigma[w]`: number of distinct shortest paths from `s` to `w`.
//! - `distance[w]`: length of those paths (`f64::INFINITY` if unreached).
//!
//! [`bfs`] builds this for unweighted graphs and [`dijkstra`] for weighted
//! ones. [`accumulate_dependencies`] then walks the stack backwards and hands
//! each non-source node's final dependency to a visitor.
//!
//! A [`ShortestPaths`] record lives for one source only.

mod bfs;
mod dijkstra;

pub(crate) use bfs::bfs;
pub(crate) use dijkstra::dijkstra;

/// Shortest-path record for one source, indexed by dense node index.
#[derive(Debug, Clone)]
pub(crate) struct ShortestPaths {
    /// Index of the source node.
    pub source: usize,
    /// Nodes in the order they were settled (non-decreasing distance).
    pub stack: Vec<usize>,
    /// Immediate predecessors on shortest paths, one entry per edge used.
    pub predecessors: Vec<Vec<usize>>,
    /// Number of shortest paths from the source.
    pub sigma: Vec<f64>,
    /// Distance from the source; `f64::INFINITY` when unreachable.
    pub distance: Vec<f64>,
}

impl ShortestPaths {
    /// Fresh record with only the source reached.
    fn new(n: usize, source: usize) -> Self {
        let mut sigma = vec![0.0; n];
        sigma[source] = 1.0;
        let mut distance = vec![f64::INFINITY; n];
        distance[source] = 0.0;
        Self {
            source,
            stack: Vec::with_capacity(n),
            predecessors: vec![Vec::new(); n],
            sigma,
            distance,
        }
    }
}

/// Back-propagate dependencies for one source.
///
/// `visit(w, delta)` is called exactly once for every reached node `w`
/// other than the source, after every shortest-path successor of `w` has
/// contributed, so `delta` is final.
pub(crate) fn accumulate_dependencies<F>(paths: &ShortestPaths, mut visit: F)
where
    F: FnMut(usize, f64),
{
    let mut delta = vec![0.0_f64; paths.sigma.len()];

    for &w in paths.stack.iter().rev() {
        // sigma[w] >= 1 for every node on the stack.
        let sigma_w = paths.sigma[w];
        let carried = 1.0 + delta[w];
        for &v in &paths.predecessors[w] {
            delta[v] += (paths.sigma[v] / sigma_w) * carried;
        }

        if w != paths.source {
            visit(w, delta[w]);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
