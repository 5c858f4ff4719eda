//! Error types and utilities for Folio

use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = std::result::Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
        /// Underlying parse or load failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persisted preference storage errors
    #[error("Storage error: {message}")]
    Storage {
        /// Message reported by the storage backend
        message: String,
        /// Storage key being read or written
        key: Option<String>,
    },

    /// Browser environment errors (missing window, document, ...)
    #[error("Browser error: {message}")]
    Browser {
        /// Which part of the environment was unavailable
        message: String,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Why the value was rejected
        message: String,
        /// Name of the offending field
        field: Option<String>,
    },
}

impl FolioError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new storage error for the given key
    pub fn storage(msg: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Storage {
            message: msg.into(),
            key: Some(key.into()),
        }
    }

    /// Create a new browser environment error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser {
            message: msg.into(),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}
