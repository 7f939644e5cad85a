//! HTTP server initialization and runtime setup.
//!
//! Builds the blob checker, wires the router and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::blob_check::{BlobChecker, CachedBlobChecker, HttpProbe};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// The blob cache is created empty here and lives as long as the returned
/// state; every request handler shares it through the checker.
///
/// # Errors
///
/// Returns an error if the HTTP client for blob probes cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let probe =
        HttpProbe::new(config.probe_timeout()).context("Failed to build blob probe client")?;
    let blob_checker: Arc<dyn BlobChecker> = Arc::new(CachedBlobChecker::new(probe));

    Ok(AppState::new(
        blob_checker,
        config.upstream_registry.clone(),
        config.region_header.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The probe client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Blob checker ready (in-memory cache)");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C so in-flight redirects can finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
