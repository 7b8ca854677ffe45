mod cors;
mod server;
mod settings;

pub use cors::{validate_origin, ANY_ORIGIN};
pub use server::ServerConfig;
pub use settings::{
    Settings, DEFAULT_ALLOWED_HOSTS, DEFAULT_APPEND_SLASH, DEFAULT_CORS_ALLOWED_ORIGINS,
};

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub settings: Settings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server.host);
        let server_port = match lookup("SERVER_PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?,
            None => defaults.server.port,
        };

        let allowed_hosts = lookup("ALLOWED_HOSTS")
            .map(|v| split_list(&v))
            .unwrap_or(defaults.settings.allowed_hosts);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| split_list(&v))
            .unwrap_or(defaults.settings.cors_allowed_origins);

        let append_slash = match lookup("APPEND_SLASH") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| AppError::Configuration("Invalid APPEND_SLASH".to_string()))?,
            None => defaults.settings.append_slash,
        };

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            settings: Settings {
                allowed_hosts,
                cors_allowed_origins,
                append_slash,
            },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "SERVER_HOST cannot be empty".to_string(),
            ));
        }

        self.settings.validate().map_err(AppError::Configuration)
    }
}

/// Split a comma-separated variable, trimming entries and dropping empty ones
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_list_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ALLOWED_HOSTS", " api.example.com , localhost,, "),
            ("CORS_ALLOWED_ORIGINS", "https://app.example.com"),
        ]))
        .unwrap();

        assert_eq!(
            config.settings.allowed_hosts,
            vec!["api.example.com", "localhost"]
        );
        assert_eq!(
            config.settings.cors_allowed_origins,
            vec!["https://app.example.com"]
        );
    }

    #[test]
    fn test_append_slash_override() {
        let config = Config::from_lookup(lookup_from(&[("APPEND_SLASH", "true")])).unwrap();
        assert!(config.settings.append_slash);
    }

    #[test]
    fn test_invalid_append_slash() {
        let result = Config::from_lookup(lookup_from(&[("APPEND_SLASH", "maybe")]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not_a_port")]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_invalid_origin_override() {
        let result = Config::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "colorcheffrontend.vercel.app",
        )]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
