//! Plan snapshot sources.
//!
//! The dependency engine is pure once it has a snapshot; this module
//! defines where snapshots come from. The trait is object-safe so callers
//! can hold a `Box<dyn PlanSnapshotProvider>` when the backing source is
//! decided at runtime.
//!
//! There is deliberately no caching layer here: every query re-reads the
//! source, so a result is tied to the point-in-time state it observed and
//! concurrent queries never contend on shared state.

use crate::domain::PlanRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A source of plan snapshots.
///
/// Implementations must be `Send + Sync` so the engine can be shared across
/// async tasks. `list_plans` is expected to reflect the current state of the
/// backing store at the moment of the call; failures propagate to the
/// caller unchanged and are never retried by the engine.
#[async_trait]
pub trait PlanSnapshotProvider: Send + Sync {
    /// List every plan in the current snapshot.
    async fn list_plans(&self) -> Result<Vec<PlanRecord>>;
}

/// Snapshot provider backed by a plans directory on disk.
///
/// Each call re-reads the directory. Files that cannot be loaded as plans
/// are skipped by the resilient loader; their warnings are logged here so
/// a query never fails over one malformed file.
#[derive(Debug, Clone)]
pub struct DirectorySnapshotProvider {
    plans_dir: PathBuf,
}

impl DirectorySnapshotProvider {
    /// Create a provider reading from the given plans directory.
    #[must_use]
    pub fn new(plans_dir: impl Into<PathBuf>) -> Self {
        Self {
            plans_dir: plans_dir.into(),
        }
    }

    /// The directory this provider reads from.
    #[must_use]
    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }
}

#[async_trait]
impl PlanSnapshotProvider for DirectorySnapshotProvider {
    async fn list_plans(&self) -> Result<Vec<PlanRecord>> {
        let (plans, warnings) = lattice_planfile::load_plan_dir(&self.plans_dir).await?;
        for warning in &warnings {
            tracing::warn!(warning = %warning, "Skipped file in plans directory");
        }
        Ok(plans.into_iter().map(PlanRecord::from).collect())
    }
}

/// Snapshot provider over a fixed in-memory set of records.
///
/// Useful for tests and for embedding the engine without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotProvider {
    records: Vec<PlanRecord>,
}

impl StaticSnapshotProvider {
    /// Create a provider serving the given records.
    #[must_use]
    pub fn new(records: Vec<PlanRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PlanSnapshotProvider for StaticSnapshotProvider {
    async fn list_plans(&self) -> Result<Vec<PlanRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanStatus;
    use tempfile::TempDir;

    #[tokio::test]
    async fn static_provider_returns_its_records() {
        let provider = StaticSnapshotProvider::new(vec![PlanRecord {
            filename: "a.md".to_string(),
            status: PlanStatus::Todo,
            blocked_by: vec![],
        }]);
        let records = provider.list_plans().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a.md");
    }

    #[tokio::test]
    async fn directory_provider_reads_current_state_on_every_call() {
        let temp = TempDir::new().unwrap();
        let provider = DirectorySnapshotProvider::new(temp.path());

        assert!(provider.list_plans().await.unwrap().is_empty());

        std::fs::write(temp.path().join("a.md"), "---\nstatus: todo\n---\n").unwrap();
        let records = provider.list_plans().await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn directory_provider_skips_malformed_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("good.md"), "---\nstatus: todo\n---\n").unwrap();
        std::fs::write(temp.path().join("bad.md"), "no frontmatter").unwrap();

        let provider = DirectorySnapshotProvider::new(temp.path());
        let records = provider.list_plans().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "good.md");
    }

    #[tokio::test]
    async fn directory_provider_propagates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let provider = DirectorySnapshotProvider::new(temp.path().join("missing"));
        assert!(provider.list_plans().await.is_err());
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let provider: Box<dyn PlanSnapshotProvider> =
            Box::new(StaticSnapshotProvider::new(Vec::new()));
        assert!(provider.list_plans().await.unwrap().is_empty());
    }
}
