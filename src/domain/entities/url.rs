//! Short URL entity.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to an original URL.
///
/// Rows are created by the shorten path and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    /// Column name kept as `short_url` in the schema.
    #[sqlx(rename = "short_url")]
    pub short_code: String,
    pub original_url: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        user_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            user_id,
            created_at,
        }
    }
}

/// Input data for inserting a short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
    pub user_id: i64,
}
