//! Handler for the root endpoint.

/// Greeting returned by `GET /`.
pub const GREETING: &str = "URL shortener service is up";

/// Returns a static greeting.
pub async fn index_handler() -> &'static str {
    GREETING
}
