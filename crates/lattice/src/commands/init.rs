//! Implementation of the `init` command.
//!
//! Initializes a lattice workspace: a `.lattice/` directory holding the
//! configuration file, plus the plans directory the configuration points
//! at.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default plans directory if none specified.
pub const DEFAULT_PLANS_DIR: &str = "plans";

/// Name of the lattice directory.
pub const LATTICE_DIR_NAME: &str = ".lattice";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Maximum directory depth to traverse when searching for the lattice root.
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure for lattice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Plans directory, relative to the workspace root.
    #[serde(rename = "plans-dir")]
    pub plans_dir: String,
}

impl LatticeConfig {
    /// Create a new configuration with the given plans directory.
    #[must_use]
    pub fn new(plans_dir: &str) -> Self {
        Self {
            plans_dir: plans_dir.to_string(),
        }
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve the plans directory against a workspace root.
    #[must_use]
    pub fn plans_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.plans_dir)
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLANS_DIR)
    }
}

/// Result of the init command.
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created lattice directory.
    pub lattice_dir: PathBuf,
    /// Path to the created config file.
    pub config_file: PathBuf,
    /// Path to the created plans directory.
    pub plans_dir: PathBuf,
}

/// Validate a plans directory name.
///
/// The name must be a single relative path component: no separators, no
/// parent references, not empty.
pub fn validate_plans_dir(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Config("Plans directory cannot be empty".to_string()));
    }

    if name == "." || name == ".." {
        return Err(Error::Config(
            "Plans directory cannot be a dot path".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::Config(
            "Plans directory must be a single path component".to_string(),
        ));
    }

    Ok(())
}

/// Initialize a new lattice workspace in the given directory.
///
/// Creates `.lattice/config.yaml` and the plans directory. Fails if the
/// workspace is already initialized.
///
/// # Errors
///
/// Returns an error if the plans directory name is invalid, the workspace
/// is already initialized, or filesystem operations fail.
pub async fn init(base_dir: &Path, plans_dir: Option<&str>) -> Result<InitResult> {
    let plans_dir_name = plans_dir.unwrap_or(DEFAULT_PLANS_DIR);
    validate_plans_dir(plans_dir_name)?;

    let lattice_dir = base_dir.join(LATTICE_DIR_NAME);
    if lattice_dir.exists() {
        return Err(Error::Config(format!(
            "Already initialized: {} exists",
            lattice_dir.display()
        )));
    }

    fs::create_dir_all(&lattice_dir).await?;

    let config = LatticeConfig::new(plans_dir_name);
    let config_file = lattice_dir.join(CONFIG_FILE_NAME);
    config.save(&config_file).await?;

    let plans_path = base_dir.join(plans_dir_name);
    fs::create_dir_all(&plans_path).await?;

    tracing::debug!(dir = %lattice_dir.display(), "Initialized lattice workspace");

    Ok(InitResult {
        lattice_dir,
        config_file,
        plans_dir: plans_path,
    })
}

/// Find the lattice workspace root by walking up from the given directory.
///
/// Returns the directory containing `.lattice/`, or `None` if no workspace
/// is found within [`MAX_TRAVERSAL_DEPTH`] levels.
#[must_use]
pub fn find_lattice_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    for _ in 0..MAX_TRAVERSAL_DEPTH {
        if current.join(LATTICE_DIR_NAME).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }

    None
}
