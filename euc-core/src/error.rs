/// Error types for the supply-chain core
use thiserror::Error;

/// Main error type for store access, parsing and external calls
#[derive(Error, Debug)]
pub enum EucError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("{resource} returned HTTP {status}")]
    BadStatus { resource: String, status: u16 },

    /// Failed to decode a JSON payload
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A backing store query failed
    #[error("Store query failed for {collection}: {reason}")]
    Store {
        collection: &'static str,
        reason: String,
    },

    /// Completion response carried no choices
    #[error("Explanation response contained no content")]
    EmptyCompletion,

    /// Unknown disruption id
    #[error("Unknown disruption scenario: {0}")]
    UnknownDisruption(String),

    /// Unknown material filter id
    #[error("Unknown material filter: {0}")]
    UnknownMaterial(String),

    /// Required setting absent
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

/// Type alias for Results using EucError
pub type Result<T> = std::result::Result<T, EucError>;
