//! Client error types.

use thiserror::Error;

/// Result type alias for client calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures of a call against the logbook API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or an undecodable response body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx answer other than 404. `message` is the server's `statusMessage`.
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("not found: {resource}")]
    NotFound { resource: String },
}

impl ClientError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::ServerError { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
        }
    }
}
