//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{DepsArgs, GraphArgs, InitArgs, ListArgs};
use crate::app::App;
use crate::output::color::{colorize_filename, colorize_status, warning};
use crate::output::{OutputMode, print_json};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;

    let result = init::init(&current_dir, args.plans_dir.as_deref()).await?;

    if !args.quiet {
        println!("Initialized lattice in {}", result.lattice_dir.display());
        println!("  Config: {}", result.config_file.display());
        println!("  Plans:  {}", result.plans_dir.display());
    }

    Ok(())
}

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let (mut plans, warnings) = lattice_planfile::load_plan_dir(app.plans_dir()).await?;

    if let Some(status) = args.status {
        let status = crate::domain::PlanStatus::from(status);
        plans.retain(|p| p.frontmatter.status == status);
    }
    if let Some(tag) = &args.tag {
        plans.retain(|p| p.frontmatter.tags.iter().any(|t| t == tag));
    }

    match output_mode {
        OutputMode::Json => {
            let items: Vec<serde_json::Value> = plans
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "filename": p.filename,
                        "status": p.frontmatter.status,
                        "tags": p.frontmatter.tags,
                        "blockedBy": p.frontmatter.blocked_by,
                    })
                })
                .collect();
            print_json(&items)?;
        }
        OutputMode::Text => {
            for warn in &warnings {
                eprintln!("{} {}", warning("warning:"), warn);
            }
            if plans.is_empty() {
                println!("No plans found in {}", app.plans_dir().display());
                return Ok(());
            }
            for plan in &plans {
                let tags = if plan.frontmatter.tags.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", plan.frontmatter.tags.join(", "))
                };
                println!(
                    "{:<12} {}{}",
                    colorize_status(plan.frontmatter.status),
                    colorize_filename(&plan.filename),
                    tags
                );
            }
        }
    }

    Ok(())
}

/// Execute the graph command
pub async fn execute_graph(app: &App, args: &GraphArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.engine().dependency_graph().await?;

    match output_mode {
        OutputMode::Json => {
            print_json(&graph)?;
        }
        OutputMode::Text => {
            if args.critical_path_only {
                for filename in &graph.critical_path {
                    println!("{filename}");
                }
                return Ok(());
            }

            println!(
                "{} plans, {} blocking relations",
                graph.nodes.len(),
                graph.edges.len()
            );
            println!();

            for node in &graph.nodes {
                println!(
                    "{:<12} {}",
                    colorize_status(node.status),
                    colorize_filename(&node.filename)
                );
                for blocker in &node.blocked_by {
                    println!("    blocked by {blocker}");
                }
            }

            println!();
            if graph.has_cycle {
                println!(
                    "{}",
                    warning("Blocking cycle detected; no critical path exists.")
                );
            } else if graph.critical_path.is_empty() {
                println!("No blocking chains.");
            } else {
                println!("Critical path ({} plans):", graph.critical_path.len());
                println!("  {}", graph.critical_path.join(" -> "));
            }
        }
    }

    Ok(())
}

/// Execute the deps command
pub async fn execute_deps(app: &App, args: &DepsArgs, output_mode: OutputMode) -> Result<()> {
    let deps = app.engine().plan_dependencies(&args.filename).await?;

    match output_mode {
        OutputMode::Json => {
            print_json(&deps)?;
        }
        OutputMode::Text => {
            println!("{}", colorize_filename(&deps.filename));

            if deps.blocked_by.is_empty() {
                println!("  blocked by: none");
            } else {
                println!("  blocked by:");
                for blocker in &deps.blocked_by {
                    println!("    {blocker}");
                }
            }

            if deps.blocks.is_empty() {
                println!("  blocks: none");
            } else {
                println!("  blocks:");
                for blocked in &deps.blocks {
                    println!("    {blocked}");
                }
            }
        }
    }

    Ok(())
}
