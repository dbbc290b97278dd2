//! Error types for plan file operations.

use std::io;
use thiserror::Error;

/// The error type for plan file operations.
///
/// Per-file data-quality problems (missing or malformed frontmatter) are not
/// errors; they surface as [`crate::warning::Warning`] values so a directory
/// load can continue past them. An `Error` means the operation as a whole
/// could not proceed.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// YAML serialization failed while writing a plan file.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The given path is not a plan file readable by this library.
    #[error("Not a plan file: {0}")]
    NotAPlanFile(String),
}

/// A specialized Result type for plan file operations.
pub type Result<T> = std::result::Result<T, Error>;
