//! Breadth-first shortest paths for unweighted graphs.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::AdjacencyGraph;
use crate::paths::ShortestPaths;

/// Unweighted single-source shortest paths from the node at `source`.
///
/// Every edge counts as one hop. A node is pushed onto the stack when it is
/// dequeued, so the stack is in non-decreasing distance order. For an edge
/// `v -> w` with `w` at exactly one hop past `v`, `v` becomes a predecessor
/// of `w` and `sigma[w]` grows by `sigma[v]`; repeated edges count again.
pub(crate) fn bfs<N>(graph: &AdjacencyGraph<N>, source: usize) -> ShortestPaths
where
    N: Clone + Eq + Hash + Debug,
{
    let n = graph.node_count();
    let mut paths = ShortestPaths::new(n, source);

    // Hop counts; `usize::MAX` = not yet seen.
    let mut hops: Vec<usize> = vec![usize::MAX; n];
    hops[source] = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        paths.stack.push(v);
        let next = hops[v] + 1;

        for w in graph.out_indices(v) {
            // First visit to w?
            if hops[w] == usize::MAX {
                hops[w] = next;
                #[allow(clippy::cast_precision_loss)]
                {
                    paths.distance[w] = next as f64;
                }
                queue.push_back(w);
            }

            // Shortest path to w via v?
            if hops[w] == next {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push(v);
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Orientation;

    #[test]
    fn counts_all_equal_length_paths() {
        // 0 -> {1, 2, 3} -> 4
        let g = AdjacencyGraph::from_edges(
            [(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)],
            Orientation::Directed,
        );
        let paths = bfs(&g, 0);
        assert!((paths.sigma[4] - 3.0).abs() < f64::EPSILON);
        assert_eq!(paths.predecessors[4].len(), 3);
        assert!((paths.distance[4] - 2.0).abs() < f64::EPSILON);
        assert_eq!(paths.stack.len(), 5);
        assert_eq!(paths.stack[0], 0);
        assert_eq!(paths.stack[4], 4);
    }

    #[test]
    fn parallel_edges_multiply_path_counts() {
        let g = AdjacencyGraph::from_adjacency([("a", vec!["b", "b"]), ("b", vec!["c"]), ("c", vec![])])
            .expect("closed");
        let paths = bfs(&g, 0);
        assert!((paths.sigma[1] - 2.0).abs() < f64::EPSILON);
        assert!((paths.sigma[2] - 2.0).abs() < f64::EPSILON);
        assert_eq!(paths.predecessors[1], vec![0, 0]);
    }

    #[test]
    fn self_loop_is_not_a_shortest_path() {
        let g = AdjacencyGraph::from_adjacency([("a", vec!["a", "b"]), ("b", vec![])]).expect("closed");
        let paths = bfs(&g, 0);
        assert!((paths.sigma[0] - 1.0).abs() < f64::EPSILON);
        assert!(paths.predecessors[0].is_empty());
        assert_eq!(paths.stack, vec![0, 1]);
    }

    #[test]
    fn unreachable_nodes_stay_out_of_the_stack() {
        let g = AdjacencyGraph::from_edges([(0, 1), (2, 3)], Orientation::Undirected);
        let paths = bfs(&g, 0);
        assert_eq!(paths.stack, vec![0, 1]);
        assert!(paths.distance[2].is_infinite());
        assert!(paths.sigma[3].abs() < f64::EPSILON);
    }
}
