//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced to a client is one of three kinds:
//!
//! - [`AppError::Validation`] - missing or malformed input (400)
//! - [`AppError::NotFound`] - the short code is unknown (404)
//! - [`AppError::Store`] - any persistence or cache failure (500)
//!
//! The response body is always `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::cache::CacheError;
use crate::utils::db_error::is_unique_violation_on_short_url;

/// Message returned to clients for every store failure.
pub const STORE_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Carries the internal reason for logging; clients only see
    /// [`STORE_ERROR_MESSAGE`].
    #[error("store error: {0}")]
    Store(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store(reason.into())
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed in the response body.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => message,
            AppError::Store(_) => STORE_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(reason) = &self {
            tracing::error!(reason = %reason, "Request failed with store error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_short_url(&e) {
            tracing::warn!("Short code collision on insert, not retrying");
            return AppError::store(format!("short code collision: {e}"));
        }

        AppError::store(format!("database error: {e}"))
    }
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::store(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
