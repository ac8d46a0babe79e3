//! Redis-backed cache implementation.

use super::service::{CacheError, CacheMapping, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for both URL projections.
///
/// Uses `ConnectionManager` for connection reuse and transparent reconnects.
/// Without a TTL, entries live until Redis evicts them under its own policy.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: Option<u64>,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - expiry applied to every write; `None` keeps entries
    ///   until evicted
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: Option<u64>) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, mapping: CacheMapping, key: &str) -> CacheResult<Option<String>> {
        let full_key = mapping.key(key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", full_key, e)))?;

        match &value {
            Some(_) => debug!(mapping = mapping.as_str(), "Cache HIT: {}", key),
            None => debug!(mapping = mapping.as_str(), "Cache MISS: {}", key),
        }

        Ok(value)
    }

    async fn set(&self, mapping: CacheMapping, key: &str, value: &str) -> CacheResult<()> {
        let full_key = mapping.key(key);
        let mut conn = self.client.clone();

        let result = match self.ttl_seconds {
            Some(ttl) => conn.set_ex::<_, _, ()>(&full_key, value, ttl).await,
            None => conn.set::<_, _, ()>(&full_key, value).await,
        };

        result.map_err(|e| CacheError::Operation(format!("SET {}: {}", full_key, e)))?;

        debug!(
            mapping = mapping.as_str(),
            "Cache SET: {} -> {} (TTL: {:?})", key, value, self.ttl_seconds
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
