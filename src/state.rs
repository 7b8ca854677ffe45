use crate::config::Settings;
use crate::error::AppResult;
use crate::hosts::AllowedHosts;

/// Application state shared across all HTTP handlers.
///
/// Wrapped in `Arc` and handed to handlers and middleware via Axum's State
/// extraction. Nothing in it changes after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings as loaded at startup
    pub settings: Settings,

    /// Compiled form of `settings.allowed_hosts`
    pub allowed_hosts: AllowedHosts,
}

impl AppState {
    pub fn new(settings: Settings) -> AppResult<Self> {
        let allowed_hosts = AllowedHosts::new(&settings.allowed_hosts)?;
        Ok(Self {
            settings,
            allowed_hosts,
        })
    }
}
