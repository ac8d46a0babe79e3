//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL records.
///
/// All statements are parameterized; SQLx prepares and caches them per
/// connection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO urls (short_url, original_url, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, short_url, original_url, user_id, created_at
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .bind(new_url.user_id)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(url) => {
                tx.commit().await?;
                Ok(url)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Rollback failed after insert error: {}", rollback_err);
                }
                Err(e.into())
            }
        }
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let url = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, short_url, original_url, user_id, created_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        let urls = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, short_url, original_url, user_id, created_at
            FROM urls
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(urls)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
