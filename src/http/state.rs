//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::SiteConfig;
use crate::telescope::TelescopeState;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Observer site defaults for the visibility endpoint
    pub site: SiteConfig,
    /// Telescope state singleton; whole-field mutations under one write lock
    pub telescope: Arc<RwLock<TelescopeState>>,
    /// Outbound HTTP client for the weather proxy
    pub weather_client: reqwest::Client,
    /// Upstream weather feed URL
    pub weather_url: String,
}

impl AppState {
    /// Create application state with a fresh telescope record.
    pub fn new(site: SiteConfig, weather_url: String) -> Self {
        Self {
            site,
            telescope: Arc::new(RwLock::new(TelescopeState::default())),
            weather_client: reqwest::Client::new(),
            weather_url,
        }
    }
}
