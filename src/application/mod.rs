//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, the cache, and metrics, and expose a
//! small API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation and resolution

pub mod services;
