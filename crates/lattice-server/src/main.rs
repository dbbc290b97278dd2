//! Lattice HTTP API server binary.

use anyhow::Result;
use clap::Parser;
use lattice::app::App;
use lattice_server::{ServerState, create_router};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Lattice HTTP API server
///
/// Serves the dependency graph of a lattice workspace over REST.
#[derive(Parser, Debug)]
#[command(name = "lattice-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workspace directory (searched upward for `.lattice/`; defaults to
    /// the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 7151)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lattice_server=info,lattice=info")),
        )
        .init();

    let args = Args::parse();

    let working_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let app = App::from_directory(&working_dir).await?;
    tracing::info!(plans_dir = %app.plans_dir().display(), "Loaded lattice workspace");

    let state = Arc::new(ServerState {
        engine: app.engine().clone(),
    });
    let router = create_router(state);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
    }
}
