//! Core domain entities.
//!
//! - [`ShortUrl`] - A short code mapped to an original URL
//! - [`User`] - Owner of short URLs
//!
//! Creation inputs use separate structs (`NewShortUrl`).

pub mod url;
pub mod user;

pub use url::{NewShortUrl, ShortUrl};
pub use user::{User, UserSummary};
