//! Error types for lattice operations.

use std::io;
use thiserror::Error;

/// The error type for lattice operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filename does not match the plan naming rules.
    #[error("Invalid plan filename: {0}")]
    InvalidFilename(String),

    /// No plan with the given filename exists in the current snapshot.
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    /// The plan snapshot could not be loaded. Propagated as-is; retry
    /// policy, if any, belongs to the snapshot source.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] lattice_planfile::Error),
}

/// A specialized Result type for lattice operations.
pub type Result<T> = std::result::Result<T, Error>;
