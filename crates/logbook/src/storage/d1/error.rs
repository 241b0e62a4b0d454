//! D1 error mapping.
//!
//! Maps `reqwest` transport errors and D1 API error envelopes to `RepositoryError`.

use logbook_core::storage::RepositoryError;
use serde::Deserialize;

/// One entry of the `errors` array in a D1 response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct D1Message {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// Maps a reqwest error to a RepositoryError.
///
/// - Connect and timeout failures → `RepositoryError::ConnectionFailed`
/// - Body decode failures → `RepositoryError::Serialization`
/// - Everything else → `RepositoryError::QueryFailed`
pub fn map_reqwest_error(err: reqwest::Error) -> RepositoryError {
    if err.is_connect() || err.is_timeout() {
        RepositoryError::ConnectionFailed(err.to_string())
    } else if err.is_decode() {
        RepositoryError::Serialization(err.to_string())
    } else {
        RepositoryError::QueryFailed(err.to_string())
    }
}

/// Collapses the API's error list into a single query failure.
pub fn map_api_errors(errors: &[D1Message]) -> RepositoryError {
    if errors.is_empty() {
        return RepositoryError::QueryFailed("D1 reported failure without details".to_string());
    }

    let message = errors
        .iter()
        .map(|e| match e.code {
            Some(code) => format!("{} (code {code})", e.message),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ");

    RepositoryError::QueryFailed(message)
}
