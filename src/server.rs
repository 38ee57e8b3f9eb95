//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and the Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::store::KvStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::{AppState, Settings};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the configured key-value store.
///
/// Redis when `REDIS_URL`/`REDIS_HOST` is set, otherwise an in-memory store.
/// Unlike a cache, the store holds the only copy of every link, so a Redis
/// connection failure is fatal instead of silently falling back to memory.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisStore::connect(
                redis_url,
                config.redis_key_prefix.clone(),
                config.store_timeout(),
            )
            .await
            .context("Failed to connect to Redis")?;
            tracing::info!("Store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, links are kept in memory only");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Builds the link service for the configured store and key policy.
///
/// # Errors
///
/// See [`connect_store`].
pub async fn build_link_service(config: &Config) -> Result<LinkService> {
    let store = connect_store(config).await?;

    Ok(LinkService::with_key_policy(
        store,
        config.key_length,
        config.key_max_attempts,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis or in-memory)
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_service = Arc::new(build_link_service(&config).await?);
    let settings = Settings::from_config(&config)?;

    let state = AppState::new(link_service, settings);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
