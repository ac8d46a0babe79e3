//! DTOs for the resolve endpoint.

use serde::{Deserialize, Serialize};

/// The original URL behind a short code. Returned as JSON, never as a redirect.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub original_url: String,
}
