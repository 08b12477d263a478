//! # Error Types Module
//!
//! This module defines the error taxonomy shared by the entities and the controller.
//! Ingredient parsing has no error type: a line that defies extraction still
//! produces a best-effort `Ingredient`.

use thiserror::Error;

/// Search or recipe retrieval failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The payload could not be decoded into recipe data
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The provider does not know the requested recipe
    #[error("Recipe not found: {0}")]
    NotFound(String),
}

/// Durable key-value store failure
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Invalid configuration value
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(502).to_string(), "Unexpected HTTP status 502");
        assert_eq!(
            FetchError::NotFound("47746".to_string()).to_string(),
            "Recipe not found: 47746"
        );
    }

    #[test]
    fn test_storage_error_from_io() {
        let err: StorageError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "Storage I/O error: disk full");

        let err = ConfigError::Invalid("FORKIFY_RESULTS_PER_PAGE", "must be >= 1");
        assert_eq!(
            err.to_string(),
            "Invalid value for FORKIFY_RESULTS_PER_PAGE: must be >= 1"
        );
    }
}
