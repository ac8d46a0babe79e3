//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Greeting
//! - `POST /shorten`        - Shorten a URL
//! - `GET  /health`         - Health check: database, cache
//! - `GET  /metrics`        - Prometheus scrape endpoint
//! - `GET  /{short_code}`   - Resolve a short code
//!
//! # Middleware
//!
//! - **Request counting** - `request_count{endpoint, method}` on every route but `/metrics`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes, request counting and tracing.
pub fn router(state: AppState) -> Router {
    api::routes::counted_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), metrics::layer))
        .merge(api::routes::metrics_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] with trailing-slash normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Router for the dedicated metrics listener.
pub fn metrics_router(state: AppState) -> Router {
    api::routes::metrics_routes()
        .with_state(state)
        .layer(tracing::layer())
}
