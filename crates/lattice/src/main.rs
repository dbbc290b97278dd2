//! Lattice CLI binary.

use anyhow::Result;
use lattice::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the lattice CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// This is appropriate for CLI applications with sequential I/O-bound
/// operations.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=lattice=debug,lattice_planfile=trace cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lattice=info,lattice_planfile=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    lattice::output::color::apply_color_setting();

    let cli = Cli::parse_args();
    cli.execute().await?;

    Ok(())
}
