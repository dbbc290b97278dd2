//! Color and styling helpers for terminal output.
//!
//! Colors are applied semantically (status, relation direction, emphasis)
//! and disabled when the `NO_COLOR` environment variable is set, per
//! <https://no-color.org/>, or when `LATTICE_COLOR` is `0`/`false`.

use crate::domain::PlanStatus;
use colored::{ColoredString, Colorize};
use std::env;

/// Whether colored output is enabled for this process.
#[must_use]
pub fn use_colors() -> bool {
    env::var("NO_COLOR").is_err()
        && env::var("LATTICE_COLOR")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true)
}

/// Apply the process-level color setting to the `colored` crate.
///
/// Called once at CLI startup so every later `Colorize` call agrees.
pub fn apply_color_setting() {
    colored::control::set_override(use_colors());
}

/// Colorize a plan status string.
#[must_use]
pub fn colorize_status(status: PlanStatus) -> ColoredString {
    let text = status.as_str();
    match status {
        PlanStatus::Todo => text.cyan(),
        PlanStatus::InProgress => text.yellow(),
        PlanStatus::Done => text.green(),
        PlanStatus::Cancelled => text.dimmed(),
    }
}

/// Colorize a plan filename.
#[must_use]
pub fn colorize_filename(filename: &str) -> ColoredString {
    filename.bold()
}

/// Render a warning line prefix.
#[must_use]
pub fn warning(text: &str) -> ColoredString {
    text.yellow()
}

/// Render an error line prefix.
#[must_use]
pub fn error(text: &str) -> ColoredString {
    text.red().bold()
}
