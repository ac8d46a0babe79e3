//! DTOs for the shorten endpoint.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Message returned when a required field is absent or empty.
pub const MISSING_FIELDS: &str = "Missing URL or user_id";

/// Request to shorten a single URL.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Only presence is checked.
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub url: Option<String>,

    /// Owner of the new record, as a JSON number or numeric string.
    #[serde(default)]
    #[validate(required)]
    pub user_id: Option<UserIdField>,
}

/// A user id accepted as `1`, `1.0` or `"1"`.
///
/// Any other JSON shape lands in `Other` so that it is reported as a missing
/// field instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserIdField {
    Number(i64),
    Float(f64),
    Text(String),
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl UserIdField {
    /// Returns the id if it is a positive integer.
    pub fn as_id(&self) -> Option<i64> {
        let id = match self {
            UserIdField::Number(n) => *n,
            UserIdField::Float(f) if f.fract() == 0.0 && *f <= i64::MAX as f64 => *f as i64,
            UserIdField::Float(_) | UserIdField::Other(_) => return None,
            UserIdField::Text(s) => s.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

impl ShortenRequest {
    /// Validates the payload and returns `(url, user_id)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is missing, empty, or
    /// the user id is not a positive integer.
    pub fn into_parts(self) -> Result<(String, i64), AppError> {
        self.validate()
            .map_err(|_| AppError::validation(MISSING_FIELDS))?;

        let user_id = self
            .user_id
            .as_ref()
            .and_then(UserIdField::as_id)
            .ok_or_else(|| AppError::validation(MISSING_FIELDS))?;

        let url = self
            .url
            .ok_or_else(|| AppError::validation(MISSING_FIELDS))?;

        Ok((url, user_id))
    }
}

/// Response carrying the short code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
