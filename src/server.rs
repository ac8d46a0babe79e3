//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, cache selection, the metrics
//! registry and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::metrics::Metrics;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::{app_router, metrics_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Redis cache (or the in-process cache as fallback)
/// - Metrics registry, and the dedicated metrics listener if configured
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let cache = build_cache(&config).await;
    let metrics = Arc::new(Metrics::new().context("Failed to create metrics registry")?);

    let url_repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(url_repository, cache, metrics.clone()));
    let state = AppState::new(url_service, metrics);

    if let Some(metrics_addr) = &config.metrics_listen_addr {
        let listener = bind_listener(metrics_addr).await?;
        tracing::info!("Metrics listening on http://{}/metrics", listener.local_addr()?);

        let router = metrics_router(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                tracing::error!("Metrics listener stopped: {}", e);
            }
        });
    }

    let app = app_router(state);

    let listener = bind_listener(&config.listen_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Binds a `host:port` address; host names are resolved.
async fn bind_listener(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind '{addr}'"))
}

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Picks Redis when configured and reachable, the in-process cache otherwise.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let fallback = || -> Arc<dyn CacheService> {
        Arc::new(MemoryCache::new(
            config.cache_max_entries,
            config.cache_ttl_seconds,
        ))
    };

    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache: in-process (Redis not configured)");
        return fallback();
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using in-process cache.", e);
            fallback()
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_resolves_host_names() {
        let listener = bind_listener("localhost:0").await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_rejects_bad_address() {
        assert!(bind_listener("not an address").await.is_err());
    }
}
