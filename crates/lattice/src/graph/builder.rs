//! Normalization of plan records into a directed dependency graph.

use crate::domain::{Edge, GraphNode, PlanRecord};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// The output of graph construction: the normalized nodes and edges, plus
/// the petgraph structures the analyses run on.
///
/// `graph` and `node_map` mirror `nodes`/`edges` exactly; node indices
/// follow snapshot order. See the module docs for the edge direction
/// convention (blocker -> blocked).
#[derive(Debug)]
pub struct BuiltGraph {
    /// One node per known plan, in snapshot order.
    pub nodes: Vec<GraphNode>,

    /// Accepted edges, deduplicated, in (blocker, blocked) snapshot order.
    pub edges: Vec<Edge>,

    /// The petgraph view of the same structure.
    pub graph: DiGraph<String, ()>,

    /// Mapping from filename to graph node index.
    pub node_map: HashMap<String, NodeIndex>,
}

/// Build the normalized dependency graph from a snapshot of plan records.
///
/// For each record, declared blockers are accepted in declaration order with
/// duplicates removed, skipping self-references and references to filenames
/// absent from the snapshot. The `blocks` relation is computed by inverting
/// the accepted edges, never read from any declaration. Should the snapshot
/// itself contain duplicate filenames, the first occurrence wins.
///
/// Pure function of its input; the cycle and critical-path fields of the
/// final graph are filled in by the later stages.
#[must_use]
pub fn build(records: &[PlanRecord]) -> BuiltGraph {
    // Known filenames, first occurrence wins on duplicates.
    let mut order: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut kept: Vec<&PlanRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !order.contains_key(record.filename.as_str()) {
            order.insert(record.filename.as_str(), kept.len());
            kept.push(record);
        }
    }

    // Accepted blockers per plan, as snapshot indices in declaration order.
    let mut blocked_by: Vec<Vec<usize>> = vec![Vec::new(); kept.len()];
    for (i, record) in kept.iter().enumerate() {
        let mut seen: HashSet<usize> = HashSet::new();
        for blocker in &record.blocked_by {
            if *blocker == record.filename {
                continue;
            }
            let Some(&j) = order.get(blocker.as_str()) else {
                continue;
            };
            if seen.insert(j) {
                blocked_by[i].push(j);
            }
        }
    }

    // Invert the accepted relation. Iterating blocked plans in snapshot
    // order makes each `blocks` list come out in snapshot order too.
    let mut blocks: Vec<Vec<usize>> = vec![Vec::new(); kept.len()];
    for (i, blockers) in blocked_by.iter().enumerate() {
        for &j in blockers {
            blocks[j].push(i);
        }
    }

    // Edge list ordered by (blocker index, blocked index).
    let mut edge_pairs: Vec<(usize, usize)> = blocked_by
        .iter()
        .enumerate()
        .flat_map(|(i, blockers)| blockers.iter().map(move |&j| (j, i)))
        .collect();
    edge_pairs.sort_unstable();

    let mut graph = DiGraph::with_capacity(kept.len(), edge_pairs.len());
    let mut node_map = HashMap::with_capacity(kept.len());
    for record in &kept {
        let index = graph.add_node(record.filename.clone());
        node_map.insert(record.filename.clone(), index);
    }
    for &(from, to) in &edge_pairs {
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }

    let nodes = kept
        .iter()
        .enumerate()
        .map(|(i, record)| GraphNode {
            filename: record.filename.clone(),
            status: record.status,
            blocked_by: blocked_by[i]
                .iter()
                .map(|&j| kept[j].filename.clone())
                .collect(),
            blocks: blocks[i]
                .iter()
                .map(|&j| kept[j].filename.clone())
                .collect(),
        })
        .collect();

    let edges = edge_pairs
        .iter()
        .map(|&(from, to)| Edge {
            from: kept[from].filename.clone(),
            to: kept[to].filename.clone(),
        })
        .collect();

    BuiltGraph {
        nodes,
        edges,
        graph,
        node_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanStatus;

    fn record(filename: &str, blocked_by: &[&str]) -> PlanRecord {
        PlanRecord {
            filename: filename.to_string(),
            status: PlanStatus::Todo,
            blocked_by: blocked_by.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn self_references_are_dropped() {
        let built = build(&[record("a.md", &["a.md"])]);
        assert!(built.edges.is_empty());
        assert!(built.nodes[0].blocked_by.is_empty());
        assert!(built.nodes[0].blocks.is_empty());
    }

    #[test]
    fn dangling_references_are_dropped() {
        let built = build(&[record("a.md", &["ghost.md"]), record("b.md", &["a.md"])]);
        assert_eq!(built.edges.len(), 1);
        assert!(built.nodes[0].blocked_by.is_empty());
        assert_eq!(built.nodes[1].blocked_by, vec!["a.md"]);
    }

    #[test]
    fn duplicate_declarations_collapse() {
        let built = build(&[record("a.md", &[]), record("b.md", &["a.md", "a.md"])]);
        assert_eq!(built.edges.len(), 1);
        assert_eq!(built.nodes[1].blocked_by, vec!["a.md"]);
        assert_eq!(built.nodes[0].blocks, vec!["b.md"]);
    }

    #[test]
    fn blocks_is_the_exact_inverse_of_blocked_by() {
        let built = build(&[
            record("a.md", &[]),
            record("b.md", &["a.md"]),
            record("c.md", &["a.md", "b.md"]),
        ]);

        for node in &built.nodes {
            for blocker in &node.blocked_by {
                let blocker_node = built
                    .nodes
                    .iter()
                    .find(|n| &n.filename == blocker)
                    .expect("blocker exists");
                assert!(blocker_node.blocks.contains(&node.filename));
            }
            for blocked in &node.blocks {
                let blocked_node = built
                    .nodes
                    .iter()
                    .find(|n| &n.filename == blocked)
                    .expect("blocked exists");
                assert!(blocked_node.blocked_by.contains(&node.filename));
            }
        }
    }

    #[test]
    fn edges_follow_snapshot_order() {
        // c.md declares blockers out of snapshot order; edges are grouped by
        // the blocker's snapshot position.
        let built = build(&[
            record("b.md", &[]),
            record("a.md", &[]),
            record("c.md", &["a.md", "b.md"]),
        ]);

        let pairs: Vec<(&str, &str)> = built
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("b.md", "c.md"), ("a.md", "c.md")]);
    }

    #[test]
    fn blocked_by_keeps_declaration_order() {
        let built = build(&[
            record("z.md", &[]),
            record("a.md", &[]),
            record("c.md", &["z.md", "a.md"]),
        ]);
        assert_eq!(built.nodes[2].blocked_by, vec!["z.md", "a.md"]);
    }

    #[test]
    fn duplicate_snapshot_filenames_keep_first() {
        let mut second = record("a.md", &[]);
        second.status = PlanStatus::Done;
        let built = build(&[record("a.md", &[]), second, record("b.md", &["a.md"])]);

        assert_eq!(built.nodes.len(), 2);
        assert_eq!(built.nodes[0].status, PlanStatus::Todo);
    }

    #[test]
    fn petgraph_view_matches_edge_list() {
        let built = build(&[record("a.md", &[]), record("b.md", &["a.md"])]);
        assert_eq!(built.graph.node_count(), 2);
        assert_eq!(built.graph.edge_count(), 1);

        let a = built.node_map["a.md"];
        let b = built.node_map["b.md"];
        assert!(built.graph.contains_edge(a, b));
    }
}
