//! # Configuration Module
//!
//! This module defines the runtime configuration for the recipe application,
//! loaded from environment variables (and a `.env` file when present).

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;

// Constants for recipe processing
pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api";
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORE_DIR: &str = "./.forkify";
pub const DEFAULT_SERVINGS: u32 = 4;
pub const MINUTES_PER_PERIOD: u32 = 15;
pub const INGREDIENTS_PER_PERIOD: usize = 3;
pub const LIKES_STORAGE_KEY: &str = "likes";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API (without trailing slash)
    pub api_url: String,
    /// Number of search results rendered per page
    pub results_per_page: usize,
    /// Timeout applied to every provider request
    pub http_timeout: Duration,
    /// Directory holding the durable key-value store
    pub store_dir: PathBuf,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("FORKIFY_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);
        if api_url.is_empty() {
            return Err(ConfigError::Invalid("FORKIFY_API_URL", "must not be empty"));
        }

        let results_per_page = match lookup("FORKIFY_RESULTS_PER_PAGE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::Invalid(
                        "FORKIFY_RESULTS_PER_PAGE",
                        "must be a positive integer",
                    ))
                }
            },
            None => defaults.results_per_page,
        };

        let http_timeout = match lookup("FORKIFY_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs >= 1 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid(
                        "FORKIFY_HTTP_TIMEOUT_SECS",
                        "must be a positive number of seconds",
                    ))
                }
            },
            None => defaults.http_timeout,
        };

        let store_dir = lookup("FORKIFY_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.store_dir);

        let log_format = match lookup("FORKIFY_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => {
                return Err(ConfigError::Invalid(
                    "FORKIFY_LOG_FORMAT",
                    "must be \"text\" or \"json\"",
                ))
            }
        };

        Ok(Self {
            api_url,
            results_per_page,
            http_timeout,
            store_dir,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.results_per_page, 10);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FORKIFY_API_URL", "http://localhost:8080/api/"),
            ("FORKIFY_RESULTS_PER_PAGE", "5"),
            ("FORKIFY_STORE_DIR", "/tmp/forkify"),
            ("FORKIFY_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.results_per_page, 5);
        assert_eq!(config.store_dir, PathBuf::from("/tmp/forkify"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("FORKIFY_RESULTS_PER_PAGE", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("FORKIFY_RESULTS_PER_PAGE", _)));

        let err = AppConfig::from_lookup(lookup_from(&[("FORKIFY_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("FORKIFY_LOG_FORMAT", _)));
    }
}
