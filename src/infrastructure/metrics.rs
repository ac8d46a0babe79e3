//! Request metrics in the Prometheus exposition format.
//!
//! A single [`Metrics`] registry is created at startup and shared through
//! [`crate::state::AppState`]. Counters are atomic; `export` gathers a
//! snapshot for scraping.

use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

use crate::infrastructure::cache::CacheMapping;

/// Application metrics container.
pub struct Metrics {
    registry: Registry,

    /// Requests by matched route template and HTTP method.
    requests: IntCounterVec,

    /// Cache lookups by mapping and outcome.
    cache_lookups: IntCounterVec,
}

impl Metrics {
    /// Creates and registers all counters.
    ///
    /// # Errors
    ///
    /// Fails only if a metric definition is invalid or registered twice.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("request_count", "App Request Count"),
            &["endpoint", "method"],
        )?;

        let cache_lookups = IntCounterVec::new(
            Opts::new("cache_lookups_total", "Cache lookups by mapping and outcome"),
            &["mapping", "outcome"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(cache_lookups.clone()))?;

        Ok(Self {
            registry,
            requests,
            cache_lookups,
        })
    }

    pub fn record_request(&self, endpoint: &str, method: &str) {
        self.requests.with_label_values(&[endpoint, method]).inc();
    }

    pub fn record_cache_lookup(&self, mapping: CacheMapping, hit: bool) {
        let outcome = if hit { "hit" } else { "miss" };
        self.cache_lookups
            .with_label_values(&[mapping.as_str(), outcome])
            .inc();
    }

    /// Current value of a request counter.
    pub fn request_count(&self, endpoint: &str, method: &str) -> u64 {
        self.requests.with_label_values(&[endpoint, method]).get()
    }

    /// Current value of a cache lookup counter.
    pub fn cache_lookup_count(&self, mapping: CacheMapping, hit: bool) -> u64 {
        let outcome = if hit { "hit" } else { "miss" };
        self.cache_lookups
            .with_label_values(&[mapping.as_str(), outcome])
            .get()
    }

    /// Exports all metrics in the Prometheus text format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
