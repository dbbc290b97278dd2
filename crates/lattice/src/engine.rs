//! The dependency query engine.
//!
//! Orchestrates snapshot loading and graph analysis to answer the two
//! dependency queries: the full graph, and the dependency summary for a
//! single plan. The graph is recomputed from a fresh snapshot on every
//! query; nothing is cached across calls, so concurrent queries are fully
//! independent and each result is consistent with the snapshot it read.

use crate::domain::{DependencyGraph, PlanDependencies};
use crate::error::{Error, Result};
use crate::graph;
use crate::snapshot::PlanSnapshotProvider;
use lattice_planfile::is_valid_plan_filename;

/// Dependency query engine over a snapshot provider.
#[derive(Debug, Clone)]
pub struct DependencyEngine<P> {
    provider: P,
}

impl<P: PlanSnapshotProvider> DependencyEngine<P> {
    /// Create an engine over the given snapshot provider.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying snapshot provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the full dependency graph from the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns whatever error the snapshot provider raised, unchanged.
    pub async fn dependency_graph(&self) -> Result<DependencyGraph> {
        let records = self.provider.list_plans().await?;
        Ok(graph::analyze(&records))
    }

    /// Get the dependency summary for one plan.
    ///
    /// The filename is validated before any snapshot read, so a
    /// syntactically invalid name never touches the backing store.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFilename`] if the filename fails the plan naming
    ///   rules
    /// - [`Error::PlanNotFound`] if no plan with that filename exists in
    ///   the current snapshot
    /// - any snapshot provider error, unchanged
    pub async fn plan_dependencies(&self, filename: &str) -> Result<PlanDependencies> {
        if !is_valid_plan_filename(filename) {
            return Err(Error::InvalidFilename(filename.to_string()));
        }

        let graph = self.dependency_graph().await?;
        let node = graph
            .node(filename)
            .ok_or_else(|| Error::PlanNotFound(filename.to_string()))?;

        Ok(PlanDependencies {
            filename: node.filename.clone(),
            blocked_by: node.blocked_by.clone(),
            blocks: node.blocks.clone(),
        })
    }
}
