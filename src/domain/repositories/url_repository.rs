//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new short URL inside a single transaction.
    ///
    /// The transaction is rolled back on any failure before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a unique
    /// violation on the short code and an unknown `user_id`.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists the URLs owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts all short URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store answers queries.
    async fn ping(&self) -> Result<(), AppError>;
}
