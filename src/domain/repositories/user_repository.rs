//! Repository trait for user records.

use crate::domain::entities::{User, UserSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// Only the admin CLI writes through this trait; the HTTP API never creates
/// or deletes users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user with a store-assigned id.
    async fn create(&self) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists users with their URL counts, ordered by id.
    async fn list(&self) -> Result<Vec<UserSummary>, AppError>;

    /// Deletes a user; owned URLs go with it through the foreign key cascade.
    ///
    /// Returns `Ok(false)` when no such user exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
