use super::cors::validate_origin;
use crate::hosts::validate_host_entry;
use serde::{Deserialize, Serialize};

/// Hostnames accepted in the `Host` header of incoming requests
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["colorchef.onrender.com", "localhost", "127.0.0.1"];

/// Origins that receive permissive CORS response headers
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &[&str] = &[
    "https://colorcheffrontend.vercel.app",
    "http://localhost:3000",
];

/// Slash-less paths are not redirected to their trailing-slash form
pub const DEFAULT_APPEND_SLASH: bool = false;

/// Request-handling settings, fixed at startup and shared read-only.
///
/// Values are kept exactly as configured; matching code lower-cases
/// on its own side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Allowed values for the `Host` header, in declaration order
    pub allowed_hosts: Vec<String>,

    /// Allowed values for the `Origin` header, in declaration order
    pub cors_allowed_origins: Vec<String>,

    /// Redirect `/path` to `/path/` when only the latter is routed
    pub append_slash: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|s| s.to_string()).collect(),
            cors_allowed_origins: DEFAULT_CORS_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            append_slash: DEFAULT_APPEND_SLASH,
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_hosts.is_empty() {
            return Err("ALLOWED_HOSTS must contain at least one host".to_string());
        }

        for host in &self.allowed_hosts {
            validate_host_entry(host)?;
        }

        for origin in &self.cors_allowed_origins {
            validate_origin(origin)?;
        }

        Ok(())
    }
}
