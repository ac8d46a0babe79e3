//! User entity.

use chrono::{DateTime, Utc};

/// Owner of zero or more short URLs.
///
/// Users are never created through the HTTP API; the admin CLI manages them.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// A user together with the number of URLs it owns.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub url_count: i64,
}
