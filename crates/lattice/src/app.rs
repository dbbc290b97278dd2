//! Application context for CLI command execution.
//!
//! The `App` struct locates the lattice workspace, loads its configuration,
//! and owns the dependency engine the commands run against.

use crate::commands::init::{CONFIG_FILE_NAME, LATTICE_DIR_NAME, LatticeConfig, find_lattice_root};
use crate::engine::DependencyEngine;
use crate::error::{Error, Result};
use crate::snapshot::DirectorySnapshotProvider;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    /// The dependency engine over the workspace's plans directory.
    engine: DependencyEngine<DirectorySnapshotProvider>,

    /// Path to the lattice directory (`.lattice`).
    lattice_dir: PathBuf,

    /// Path to the plans directory.
    plans_dir: PathBuf,
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree to find a `.lattice/` directory,
    /// loads configuration, and wires up the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if no lattice workspace is found in the directory
    /// tree or the configuration cannot be loaded.
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_lattice_root(working_dir).ok_or_else(|| {
            Error::Config(format!(
                "Not a lattice workspace (no {LATTICE_DIR_NAME} directory found from {})",
                working_dir.display()
            ))
        })?;

        let lattice_dir = root_dir.join(LATTICE_DIR_NAME);
        let config = LatticeConfig::load(&lattice_dir.join(CONFIG_FILE_NAME)).await?;
        let plans_dir = config.plans_dir_in(&root_dir);

        Ok(Self {
            engine: DependencyEngine::new(DirectorySnapshotProvider::new(&plans_dir)),
            lattice_dir,
            plans_dir,
        })
    }

    /// The dependency engine for this workspace.
    #[must_use]
    pub fn engine(&self) -> &DependencyEngine<DirectorySnapshotProvider> {
        &self.engine
    }

    /// Get the path to the lattice directory.
    #[must_use]
    pub fn lattice_dir(&self) -> &Path {
        &self.lattice_dir
    }

    /// Get the path to the plans directory.
    #[must_use]
    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }
}
