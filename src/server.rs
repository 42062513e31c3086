//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state wiring and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Builds the link store selected by `STORE_BACKEND`.
///
/// Redis is connected with exponential backoff (100 ms base, capped at 5 s),
/// up to `REDIS_CONNECT_RETRIES` attempts.
///
/// # Errors
///
/// Returns an error if Redis stays unreachable after every attempt.
pub async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; links are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let strategy = ExponentialBackoff::from_millis(100)
                .max_delay(std::time::Duration::from_secs(5))
                .map(jitter)
                .take(config.redis_connect_retries.saturating_sub(1));

            let store = Retry::spawn(strategy, move || async move {
                RedisStore::connect(&config.redis_url, config.redis_key_prefix.clone())
                    .await
                    .inspect_err(|e| tracing::warn!("Redis not ready: {}", e))
            })
            .await
            .context("Failed to connect to Redis")?;

            Ok(Arc::new(store))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis or in-memory)
/// - Allocator and resolver services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    tracing::info!("Link store ready ({})", store.backend_name());

    let state = AppState::from_config(store, &config);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
