//! Domain types for plan dependency analysis.
//!
//! These are the types exchanged with the routing layer and serialized in
//! API responses, so the serde field names follow the API's camelCase
//! convention.

use serde::{Deserialize, Serialize};

pub use lattice_planfile::PlanStatus;

/// A plan as supplied by the snapshot source: the raw, untrusted input to
/// graph construction.
///
/// `blocked_by` is carried exactly as declared — it may be empty, reference
/// nonexistent plans, repeat entries, or name the plan itself. Graph
/// construction normalizes all of that away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// The plan's file name, unique within a snapshot.
    pub filename: String,

    /// Current status of the plan.
    pub status: PlanStatus,

    /// Declared blocker filenames, in declaration order.
    #[serde(default)]
    pub blocked_by: Vec<String>,
}

impl From<lattice_planfile::PlanFile> for PlanRecord {
    fn from(plan: lattice_planfile::PlanFile) -> Self {
        Self {
            filename: plan.filename,
            status: plan.frontmatter.status,
            blocked_by: plan.frontmatter.blocked_by,
        }
    }
}

/// A plan in the built dependency graph, with its relations normalized.
///
/// `blocked_by` holds only accepted blockers (self and dangling references
/// dropped, duplicates removed, declaration order kept). `blocks` is the
/// computed inverse relation: the plans waiting on this one, in snapshot
/// order. It is never declared directly, so the two views cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// The plan's file name.
    pub filename: String,

    /// Current status of the plan.
    pub status: PlanStatus,

    /// Filenames of plans that block this one.
    pub blocked_by: Vec<String>,

    /// Filenames of plans this one blocks (computed inverse).
    pub blocks: Vec<String>,
}

/// A directed blocking relation: `from` must complete before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The blocking plan.
    pub from: String,

    /// The blocked plan.
    pub to: String,
}

/// The fully analyzed dependency graph for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraph {
    /// One node per known plan, in snapshot order.
    pub nodes: Vec<GraphNode>,

    /// Accepted blocking relations, deduplicated, ordered by the blocker's
    /// snapshot position and then the blocked plan's snapshot position.
    pub edges: Vec<Edge>,

    /// Whether the blocking relations contain a directed cycle.
    pub has_cycle: bool,

    /// The longest chain of sequentially dependent plans. Empty when the
    /// graph is cyclic or has no edges.
    pub critical_path: Vec<String>,
}

impl DependencyGraph {
    /// Look up a node by filename.
    #[must_use]
    pub fn node(&self, filename: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.filename == filename)
    }
}

/// The dependency summary for a single plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDependencies {
    /// The plan's file name.
    pub filename: String,

    /// Filenames of plans that block this one.
    pub blocked_by: Vec<String>,

    /// Filenames of plans this one blocks.
    pub blocks: Vec<String>,
}
