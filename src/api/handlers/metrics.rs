//! Handler for the metrics scrape endpoint.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;

/// Exports request counters in the Prometheus text exposition format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .export()
        .map_err(|e| AppError::store(format!("metrics encoding failed: {e}")))?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
