//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid
//! values.

/// Validate a plan filename argument.
///
/// Delegates to the plan file naming rules in `lattice-planfile` to keep a
/// single source of truth: one or more ASCII letters, digits, underscores,
/// or hyphens, followed by `.md`.
///
/// Examples: `blue-running-fox.md`, `plan_01.md`
pub fn validate_plan_filename(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Plan filename cannot be empty".to_string());
    }

    if !lattice_planfile::is_valid_plan_filename(s) {
        return Err(format!(
            "Invalid plan filename: '{s}'. Expected letters, digits, underscores, or hyphens followed by '.md' (e.g. blue-running-fox.md)"
        ));
    }

    Ok(s.to_string())
}
