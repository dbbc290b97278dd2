//! Cycle detection over the built dependency graph.

use crate::graph::builder::BuiltGraph;
use petgraph::algo;

/// The cycle verdict for a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCheck {
    /// Whether any directed cycle exists.
    pub has_cycle: bool,

    /// Filenames of the plans participating in a cycle, sorted. Empty when
    /// the graph is acyclic.
    pub cycle_nodes: Vec<String>,
}

/// Detect directed cycles in the blocking structure.
///
/// Uses strongly-connected components: a cycle exists exactly when some
/// component contains more than one node (self-loops are dropped during
/// construction, so single-node components are never cyclic). All members
/// of all such components are reported, which tells the caller not just
/// that the blocking order is unsatisfiable but which plans to untangle.
///
/// Runs in O(nodes + edges).
#[must_use]
pub fn detect_cycles(built: &BuiltGraph) -> CycleCheck {
    let mut cycle_nodes: Vec<String> = algo::tarjan_scc(&built.graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .flatten()
        .map(|index| built.graph[index].clone())
        .collect();
    cycle_nodes.sort_unstable();

    CycleCheck {
        has_cycle: !cycle_nodes.is_empty(),
        cycle_nodes,
    }
}
