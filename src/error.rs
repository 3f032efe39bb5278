//! Error types for gazette-dl
//!
//! Only failures that abort an operation live here. A publication whose body
//! could not be fetched is not an error: it is recorded as
//! [`Body::Unavailable`](crate::types::Body::Unavailable) on that one record.

use thiserror::Error;

/// Result type alias for gazette-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gazette-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "fetch.max_concurrent_fetches")
        key: Option<String>,
    },

    /// An outline node violates the leaf/internal invariant
    #[error("malformed summary tree: {reason}")]
    MalformedTree {
        /// What was wrong with the node
        reason: String,
    },

    /// A document the scrape cannot proceed without returned no content
    #[error("no content available at {url}")]
    Unavailable {
        /// URL that yielded nothing
        url: String,
    },

    /// A fetcher raised an error instead of reporting absent content
    #[error("fetch of {url} failed: {message}")]
    Fetch {
        /// URL being fetched
        url: String,
        /// Underlying failure
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A concurrent task panicked or was cancelled
    #[error("task error: {0}")]
    Task(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a specific key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Shorthand for a [`Error::MalformedTree`]
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedTree {
            reason: reason.into(),
        }
    }
}
