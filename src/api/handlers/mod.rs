//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod index;
pub mod metrics;
pub mod resolve;
pub mod shorten;

pub use health::health_handler;
pub use index::index_handler;
pub use metrics::metrics_handler;
pub use resolve::{resolve_handler, resolve_shorten_path_handler};
pub use shorten::shorten_handler;
