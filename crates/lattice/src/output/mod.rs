//! Output formatting for CLI commands.
//!
//! Commands render in either human-readable text or JSON for programmatic
//! use. Submodule [`color`] holds the semantic color helpers.

pub mod color;

use serde::Serialize;
use std::io::{self, Write};

/// How command output should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Text,
    /// JSON for programmatic use.
    Json,
}

/// Print a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
