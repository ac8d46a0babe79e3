//! Short URL creation and resolution service.
//!
//! Both paths follow cache-aside: the cache is read first, the store is
//! consulted on a miss, and the cache is populated afterwards. A cache hit is
//! authoritative for the lifetime of the entry; the store is not re-checked.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheMapping, CacheService};
use crate::infrastructure::metrics::Metrics;
use crate::utils::code_generator::generate_code;
use tracing::{debug, info, warn};

/// Message returned when a short code is unknown.
pub const URL_NOT_FOUND: &str = "URL not found";

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// The URL was already cached; no record was written.
    Cached(String),
    /// A new record was committed.
    Created(ShortUrl),
}

impl ShortenOutcome {
    pub fn short_code(&self) -> &str {
        match self {
            ShortenOutcome::Cached(code) => code,
            ShortenOutcome::Created(url) => &url.short_code,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and resolving short URLs.
pub struct UrlService {
    url_repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
    metrics: Arc<Metrics>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            url_repository,
            cache,
            metrics,
        }
    }

    /// Returns a short code for `original_url`, creating a record on a cache
    /// miss.
    ///
    /// A cached mapping is returned as-is, even when `user_id` differs from
    /// the user who created it. A freshly generated code is not checked for
    /// collisions beforehand and is not regenerated if the insert fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the cache read or the insert fails.
    pub async fn shorten(
        &self,
        original_url: String,
        user_id: i64,
    ) -> Result<ShortenOutcome, AppError> {
        let cached = self.cache.get(CacheMapping::UrlToCode, &original_url).await?;
        self.metrics
            .record_cache_lookup(CacheMapping::UrlToCode, cached.is_some());

        if let Some(code) = cached {
            debug!(code = %code, "Returning cached short code");
            return Ok(ShortenOutcome::Cached(code));
        }

        let new_url = NewShortUrl {
            short_code: generate_code(),
            original_url,
            user_id,
        };

        let created = self.url_repository.create(new_url).await?;
        info!(code = %created.short_code, user_id, "Short URL created");

        self.write_back(
            CacheMapping::UrlToCode,
            &created.original_url,
            &created.short_code,
        )
        .await;

        Ok(ShortenOutcome::Created(created))
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is in neither the cache nor
    /// the store, and [`AppError::Store`] if either lookup fails.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let cached = self.cache.get(CacheMapping::CodeToUrl, short_code).await?;
        self.metrics
            .record_cache_lookup(CacheMapping::CodeToUrl, cached.is_some());

        if let Some(original_url) = cached {
            return Ok(original_url);
        }

        let url = self
            .url_repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(URL_NOT_FOUND))?;

        self.write_back(CacheMapping::CodeToUrl, &url.short_code, &url.original_url)
            .await;

        Ok(url.original_url)
    }

    /// Checks that the persistence store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the ping fails.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.url_repository.ping().await
    }

    /// Checks the cache backend, returning its name and status.
    pub async fn check_cache(&self) -> (&'static str, bool) {
        (self.cache.backend(), self.cache.health_check().await)
    }

    /// Populates the cache after a successful store operation.
    ///
    /// The record is already durable at this point, so a failed write only
    /// costs a future cache miss.
    async fn write_back(&self, mapping: CacheMapping, key: &str, value: &str) {
        if let Err(e) = self.cache.set(mapping, key, value).await {
            warn!(mapping = mapping.as_str(), "Cache write-back failed: {}", e);
        }
    }
}
