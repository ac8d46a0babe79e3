//! In-process cache used when Redis is not configured or unreachable.

use super::service::{CacheMapping, CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

/// Default entry budget when none is configured.
pub const DEFAULT_MAX_ENTRIES: u64 = 100_000;

/// A bounded, per-process cache backed by `moka`.
///
/// Entries are evicted by moka's size-based policy and, if set, by TTL.
/// Mappings never change once written, so a per-process copy stays correct
/// across multiple service instances; only the hit rate suffers.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Cache<String, String>,
}

impl MemoryCache {
    pub fn new(max_entries: u64, ttl_seconds: Option<u64>) -> Self {
        let mut builder = Cache::<String, String>::builder().max_capacity(max_entries);
        if let Some(ttl) = ttl_seconds {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        debug!(max_entries, ?ttl_seconds, "Using in-process cache");
        Self {
            entries: builder.build(),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, None)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, mapping: CacheMapping, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.get(&mapping.key(key)).await)
    }

    async fn set(&self, mapping: CacheMapping, key: &str, value: &str) -> CacheResult<()> {
        self.entries
            .insert(mapping.key(key), value.to_string())
            .await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
