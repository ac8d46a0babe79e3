//! API route configuration.
//!
//! No endpoint requires authentication.

use crate::api::handlers::{
    health_handler, index_handler, metrics_handler, resolve_handler,
    resolve_shorten_path_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes counted by the request metrics middleware.
///
/// # Endpoints
///
/// - `GET  /`              - Static greeting
/// - `POST /shorten`       - Create (or fetch the cached) short code
/// - `GET  /health`        - Database and cache status
/// - `GET  /{short_code}`  - Resolve a short code to its original URL
///
/// Static paths take precedence over `/{short_code}`, so `health` and
/// `metrics` can never be resolved as codes. `GET /shorten` is still a code
/// lookup.
pub fn counted_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/shorten",
            post(shorten_handler).get(resolve_shorten_path_handler),
        )
        .route("/health", get(health_handler))
        .route("/{short_code}", get(resolve_handler))
}

/// The scrape endpoint, kept out of the request counters.
///
/// - `GET /metrics` - Prometheus text exposition
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
