//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// The two projections of a URL record kept in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheMapping {
    /// `original_url -> short_code`, consulted when shortening.
    UrlToCode,
    /// `short_code -> original_url`, consulted when resolving.
    CodeToUrl,
}

impl CacheMapping {
    /// Key namespace so a URL can never shadow a short code.
    pub fn key_prefix(self) -> &'static str {
        match self {
            CacheMapping::UrlToCode => "url2code:",
            CacheMapping::CodeToUrl => "code2url:",
        }
    }

    /// Label used in metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheMapping::UrlToCode => "url_to_code",
            CacheMapping::CodeToUrl => "code_to_url",
        }
    }

    pub fn key(self, raw: &str) -> String {
        format!("{}{}", self.key_prefix(), raw)
    }
}

/// Key-value cache holding both URL projections.
///
/// Entries are trusted for their whole lifetime: callers never re-check the
/// store on a hit. Unlike a fail-open cache, errors are returned to the caller,
/// which decides whether they abort the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache used when Redis is absent
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up `key` in the given mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be reached.
    async fn get(&self, mapping: CacheMapping, key: &str) -> CacheResult<Option<String>>;

    /// Stores `key -> value` in the given mapping, applying the configured TTL
    /// if any.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be reached.
    async fn set(&self, mapping: CacheMapping, key: &str, value: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;
}
