//! Streamables solve service
//!
//! Serves signatures for the Streamables UI. The solve result is what the UI
//! shows through its `onSolveSuccess` action.
//!
//! Usage:
//!   SECRET=... streamables-service --port 8000
//!
//! The service keeps no state besides the secret it was started with.

use std::{net::SocketAddr, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use streamables_service::build_router;
use streamables_solver::{SECRET_ENV, Solver};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "streamables-service")]
#[command(about = "Streamables signature solve service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_target(false)
        .compact()
        .init();

    info!("Streamables solve service starting...");
    let solver = Solver::from_env()
        .with_context(|| format!("{SECRET_ENV} must be set to a non-empty value"))?;

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, build_router(Arc::new(solver)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
