//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `addr` - The address to bind the server to (e.g., "127.0.0.1:8000")
///
/// # Errors
///
/// This function will return an error if:
/// - The allowed-hosts list cannot be compiled
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting colorchef server...");

    let settings = config.settings;
    info!(allowed_hosts = ?settings.allowed_hosts, "Host validation enabled");
    info!(allowed_origins = ?settings.cors_allowed_origins, "CORS enabled");
    info!(append_slash = settings.append_slash, "Trailing-slash redirects");

    let state = Arc::new(AppState::new(settings)?);
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails; without it the process
/// cannot shut down gracefully at all.
async fn create_shutdown_signal() {
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

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
