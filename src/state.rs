//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, metrics: Arc<Metrics>) -> Self {
        Self {
            url_service,
            metrics,
        }
    }
}
