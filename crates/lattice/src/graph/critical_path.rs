//! Critical path computation over an acyclic dependency graph.

use crate::graph::builder::BuiltGraph;
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::NodeIndex;

/// Compute the critical path: the longest chain of sequentially dependent
/// plans, one step per edge, every plan weighing the same (no duration is
/// modeled at this layer).
///
/// Only meaningful on an acyclic graph; the caller checks the cycle verdict
/// first and substitutes an empty path for cyclic graphs. A graph with no
/// edges has no chain to report and also yields an empty path — a single
/// isolated plan is not a chain.
///
/// Ties are pinned for reproducibility: among predecessors with equal chain
/// length the lexicographically smallest filename wins, and likewise for
/// the chain's end node.
#[must_use]
pub fn compute_critical_path(built: &BuiltGraph) -> Vec<String> {
    if built.edges.is_empty() {
        return Vec::new();
    }

    // The cycle check gates this call, so toposort only fails if the caller
    // skipped it; an empty path is then the same conservative answer the
    // cyclic case gets.
    let Ok(topo) = algo::toposort(&built.graph, None) else {
        return Vec::new();
    };

    let node_count = built.graph.node_count();
    let mut chain_len = vec![1_usize; node_count];
    let mut on_path_pred: Vec<Option<NodeIndex>> = vec![None; node_count];

    for &node in &topo {
        let mut best: Option<NodeIndex> = None;
        for pred in built.graph.neighbors_directed(node, Direction::Incoming) {
            best = Some(match best {
                None => pred,
                Some(current) => {
                    let (len_pred, len_current) =
                        (chain_len[pred.index()], chain_len[current.index()]);
                    if len_pred > len_current
                        || (len_pred == len_current && built.graph[pred] < built.graph[current])
                    {
                        pred
                    } else {
                        current
                    }
                }
            });
        }
        if let Some(pred) = best {
            chain_len[node.index()] = chain_len[pred.index()] + 1;
            on_path_pred[node.index()] = Some(pred);
        }
    }

    let mut end = NodeIndex::new(0);
    for index in (0..node_count).map(NodeIndex::new) {
        let longer = chain_len[index.index()] > chain_len[end.index()];
        let tie_smaller = chain_len[index.index()] == chain_len[end.index()]
            && built.graph[index] < built.graph[end];
        if longer || tie_smaller {
            end = index;
        }
    }

    let mut path = Vec::with_capacity(chain_len[end.index()]);
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(built.graph[node].clone());
        current = on_path_pred[node.index()];
    }
    path.reverse();
    path
}
