//! Handler for short code resolution.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Check the cache for the code
/// 2. On a miss, query the database
/// 3. On a database hit, write the mapping back to the cache
///
/// The URL is returned as JSON; no redirect is issued.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "URL not found"}` for unknown codes
/// and 500 on store failures.
pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    lookup(&state, &short_code).await
}

/// Resolves the literal path `/shorten` on `GET`.
///
/// Only `POST /shorten` creates codes; `GET /shorten` is a short code lookup
/// like any other `/{short_code}`.
pub async fn resolve_shorten_path_handler(
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    lookup(&state, "shorten").await
}

async fn lookup(state: &AppState, short_code: &str) -> Result<Json<ResolveResponse>, AppError> {
    let original_url = state.url_service.resolve(short_code).await?;

    Ok(Json(ResolveResponse { original_url }))
}
