//! Error types for the tracker client.

use thiserror::Error;

/// Result type alias for tracker client operations.
pub type Result<T> = std::result::Result<T, JiraError>;

/// Errors that can occur talking to the tracker.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Transport-level failure: connect, timeout, TLS, or body decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker answered with a non-success status.
    #[error("tracker answered {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
