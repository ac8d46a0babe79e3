//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and in-process implementations)
//! - [`metrics`] - Prometheus request counters and exposition
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod metrics;
pub mod persistence;
