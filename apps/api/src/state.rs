use crate::config::Config;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page box every render is laid out against.
    pub page_config: PageConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            page_config: config.page_config(),
        }
    }
}
