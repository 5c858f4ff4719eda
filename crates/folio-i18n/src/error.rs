//! Error types for content loading

use thiserror::Error;

/// Reasons a content file is unavailable.
///
/// Callers treat every variant the same way; the distinction only feeds the logs.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The request never produced a response
    #[error("Failed to fetch {path}: {message}")]
    Fetch {
        /// Content file requested
        path: String,
        /// Transport failure reported by the client
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Request for {path} returned status {status}")]
    Status {
        /// Content file requested
        path: String,
        /// HTTP status code of the response
        status: u16,
    },

    /// The payload is not the expected JSON shape
    #[error("Malformed content in {path}: {source}")]
    Malformed {
        /// Content file requested
        path: String,
        /// Decoder failure
        #[source]
        source: serde_json::Error,
    },

    /// Reading a local content file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Content file requested
        path: String,
        /// Filesystem failure
        #[source]
        source: std::io::Error,
    },

    /// The content path cannot be resolved against the base URL
    #[error("Invalid content path {path}: {message}")]
    InvalidPath {
        /// Content path as given
        path: String,
        /// Why the path could not be joined
        message: String,
    },
}

impl ContentError {
    /// Path of the content file concerned.
    pub fn path(&self) -> &str {
        match self {
            Self::Fetch { path, .. }
            | Self::Status { path, .. }
            | Self::Malformed { path, .. }
            | Self::Io { path, .. }
            | Self::InvalidPath { path, .. } => path,
        }
    }
}
