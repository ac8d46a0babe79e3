//! Request counting middleware.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Label used when a request reaches the layer without a matched route.
const UNMATCHED: &str = "unmatched";

/// Increments `request_count{endpoint, method}` once per request.
///
/// Must be installed with `route_layer` so that [`MatchedPath`] is set; the
/// endpoint label is the route template (`/{short_code}`), never the raw path.
/// Counting happens before the handler runs, so every outcome is counted.
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str())
        .unwrap_or(UNMATCHED);

    state.metrics.record_request(endpoint, req.method().as_str());

    next.run(req).await
}
