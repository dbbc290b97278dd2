//! Dependency graph construction and analysis using petgraph.
//!
//! This module turns a snapshot of plan records into a normalized directed
//! graph and answers the two structural questions the tool cares about: does
//! the blocking structure contain a cycle, and if not, what is the critical
//! path through it.
//!
//! # Graph Representation and Edge Direction Convention
//!
//! The graph uses petgraph's `DiGraph` with edges directed from **blocker to
//! blocked**:
//!
//! - **Edge source**: the plan that must complete first (the blocker)
//! - **Edge target**: the plan waiting on it (the blocked plan)
//!
//! So a plan declaring `blocked_by: [x.md]` contributes the edge
//! `x.md -> plan`. A node's blockers are its incoming neighbors and the
//! plans it blocks are its outgoing neighbors.
//!
//! # Input Normalization
//!
//! Plan files are edited by hand, so declarations are untrusted. During
//! construction:
//!
//! - self-references are dropped (`a.md` blocked by `a.md`)
//! - references to filenames absent from the snapshot are dropped
//! - duplicate declarations collapse to one edge
//!
//! None of these are errors; a single malformed declaration must not corrupt
//! the rest of the graph. A cyclic graph is likewise a reportable state, not
//! a failure.
//!
//! # Determinism
//!
//! Every output order is pinned: nodes follow snapshot order, `blocked_by`
//! keeps declaration order, `blocks` and edges follow snapshot order, and
//! critical-path ties break toward the lexicographically smallest filename.
//! Two analyses of the same snapshot are structurally identical.

mod builder;
mod critical_path;
mod cycle;

pub use builder::{BuiltGraph, build};
pub use critical_path::compute_critical_path;
pub use cycle::{CycleCheck, detect_cycles};

use crate::domain::{DependencyGraph, PlanRecord};

/// Run the full analysis pipeline on a snapshot of plan records.
///
/// Builds the normalized graph, checks for cycles, and computes the
/// critical path — which is left empty when the graph is cyclic (a partial
/// answer over a cyclic structure would be misleading) or when there are no
/// edges at all.
#[must_use]
pub fn analyze(records: &[PlanRecord]) -> DependencyGraph {
    let built = build(records);
    let cycle_check = detect_cycles(&built);

    let critical_path = if cycle_check.has_cycle {
        Vec::new()
    } else {
        compute_critical_path(&built)
    };

    DependencyGraph {
        nodes: built.nodes,
        edges: built.edges,
        has_cycle: cycle_check.has_cycle,
        critical_path,
    }
}
