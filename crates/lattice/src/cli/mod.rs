//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for lattice using clap's
//! derive API. Each command has its own argument struct with validation and
//! helpful error messages.
//!
//! # Commands
//!
//! - `init`: Initialize a new lattice workspace
//! - `list`: List plans with their status and tags
//! - `graph`: Show the full dependency graph with cycle and critical-path
//!   analysis
//! - `deps`: Show what blocks a plan and what it blocks
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! lattice init --plans-dir plans
//! lattice graph --json
//! lattice deps green-dancing-cat.md
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{DepsArgs, GraphArgs, InitArgs, ListArgs};

// Re-export types
pub use types::PlanStatusArg;

// Re-export validators for external use
pub use validators::validate_plan_filename;

/// Lattice - markdown-backed plan tracking with dependency analysis
///
/// Plans are markdown files with YAML frontmatter declaring status, tags,
/// and blocking relationships. Lattice builds the dependency graph across
/// them, detects cycles, and computes the critical path.
#[derive(Parser, Debug)]
#[command(name = "lattice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new lattice workspace
    ///
    /// Creates the `.lattice/` directory with configuration and the plans
    /// directory. Run this once in your project root to start tracking
    /// plans.
    Init(InitArgs),

    /// List plans with their status and tags
    List(ListArgs),

    /// Show the dependency graph
    ///
    /// Builds the graph from the current plan files, reports any blocking
    /// cycle, and prints the critical path when the graph is acyclic.
    Graph(GraphArgs),

    /// Show a plan's dependencies
    ///
    /// Prints the plans blocking the given plan and the plans waiting on
    /// it.
    Deps(DepsArgs),
}

impl Cli {
    /// Parse CLI arguments from command line.
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing).
    ///
    /// # Errors
    ///
    /// Returns a clap error when the arguments do not parse.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error when the workspace cannot be found or the command
    /// itself fails.
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Init(args) => execute::execute_init(args).await,
            Commands::List(args) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_list(&app, args, output_mode).await
            }
            Commands::Graph(args) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_graph(&app, args, output_mode).await
            }
            Commands::Deps(args) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_deps(&app, args, output_mode).await
            }
        }
    }
}
