//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "user_id": 1 }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "aZ3kT9" }
/// ```
///
/// - **201 Created**: a new record was written
/// - **200 OK**: the URL was already cached, whoever shortened it
///
/// # Errors
///
/// Returns 400 Bad Request if `url` or `user_id` is missing or empty, or the
/// body is not JSON. Returns 500 on any store failure, including a short code
/// collision.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    let (url, user_id) = payload.into_parts()?;

    let outcome = state.url_service.shorten(url, user_id).await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ShortenResponse {
            short_url: outcome.short_code().to_string(),
        }),
    ))
}
