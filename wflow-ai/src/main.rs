//! wflow-ai (Workflow AI) - Approval scoring and analytics microservice
//!
//! Serves rule-based approval predictions, dashboard analytics fixtures and
//! workflow summaries over HTTP/JSON. Default port 8000.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use wflow_ai::{build_router, AppState};
use wflow_common::config::{ConfigLoader, ConfigOverrides};
use wflow_common::logging::init_tracing;

/// Command-line arguments for wflow-ai
#[derive(Parser, Debug)]
#[command(name = "wflow-ai")]
#[command(about = "Workflow approval scoring and analytics service")]
#[command(version)]
struct Args {
    /// Interface to listen on
    #[arg(long, env = "WFLOW_AI_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WFLOW_AI_PORT")]
    port: Option<u16>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, env = "WFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WFLOW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "WFLOW_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new("wflow")
        .load(args.config.as_deref())
        .context("Failed to load configuration")?;

    let config = loaded.config.clone().with_overrides(ConfigOverrides {
        host: args.host,
        port: args.port,
        log_level: args.log_level,
        log_file: args.log_file,
    });

    init_tracing(&config.logging).context("Failed to initialize logging")?;

    info!(
        "Starting Workflow AI service (wflow-ai) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    loaded.log_source();

    let addr = config.bind_address().context("Invalid listen address")?;

    let app = build_router(AppState::default());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("wflow-ai listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
