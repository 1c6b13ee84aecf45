//! Presenca Binary Entry Point
//!
//! This binary runs the presence tracking HTTP service.
//! Core functionality is provided by the `presenca` library crate.

use clap::Parser;
use presenca::{
    config::AppConfig,
    server::{AppState, create_router},
    storage::StorageBuilder,
};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Presenca - Room Presence Tracking Service
#[derive(Parser, Debug)]
#[command(name = "presenca", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "configs/config.yaml",
        env = "PRESENCA_CONFIG"
    )]
    config: String,

    /// Server bind address (overrides config file)
    #[arg(long, env = "PRESENCA_BIND")]
    bind: Option<String>,

    /// Server port (overrides config file)
    #[arg(long, env = "PRESENCA_PORT")]
    port: Option<u16>,

    /// Database file path (overrides config file)
    #[arg(long, env = "PRESENCA_DB_PATH")]
    db_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,presenca=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Presenca - Room Presence Tracking Service");

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (defaults apply when the file is absent)
    tracing::info!("Loading configuration from: {}", cli.config);
    let mut config = AppConfig::load_or_default(&cli.config)?;

    // Apply CLI/env overrides (CLI > ENV > config file)
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(db_path) = cli.db_path {
        config.database.path = db_path;
    }
    config.validate()?;

    tracing::info!(
        "Server: {}:{}, Database: {}",
        config.server.bind,
        config.server.port,
        config.database.path,
    );

    // Build storage layer
    let storage = StorageBuilder::new(&config.database.path)
        .max_connections(config.database.pool_size)
        .build()
        .await?;

    tracing::info!("Storage initialized");

    // Build Axum router
    let state = AppState {
        storage: storage.clone(),
    };
    let app = create_router(state, config.statics.root.as_deref());

    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;

    tracing::info!("Web server listening on: http://{}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down storage...");
    storage.close().await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}
