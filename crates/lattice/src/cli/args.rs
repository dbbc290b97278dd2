//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::types::PlanStatusArg;
use super::validators::validate_plan_filename;

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Plans directory name (single path component, default "plans")
    #[arg(short, long)]
    pub plans_dir: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Filter by status
    #[arg(short, long, value_enum)]
    pub status: Option<PlanStatusArg>,

    /// Filter by tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the `graph` command
#[derive(Parser, Debug, Clone)]
pub struct GraphArgs {
    /// Only print the critical path
    #[arg(long)]
    pub critical_path_only: bool,
}

/// Arguments for the `deps` command
#[derive(Parser, Debug, Clone)]
pub struct DepsArgs {
    /// Plan filename to inspect (e.g. "green-dancing-cat.md")
    #[arg(value_parser = validate_plan_filename)]
    pub filename: String,
}
