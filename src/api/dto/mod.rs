//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request payloads are checked
//! with `validator`.

pub mod health;
pub mod resolve;
pub mod shorten;
