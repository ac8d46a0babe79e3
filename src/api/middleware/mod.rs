//! HTTP middleware for request processing.
//!
//! Provides request counting and tracing middleware.

pub mod metrics;
pub mod tracing;
