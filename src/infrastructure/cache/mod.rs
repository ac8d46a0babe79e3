//! Caching layer for both URL projections.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process fallback when Redis is not configured

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::{DEFAULT_MAX_ENTRIES, MemoryCache};
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheMapping, CacheResult, CacheService};
