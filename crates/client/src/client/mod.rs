//! HTTP client for the logbook API.

pub mod auth;
pub mod health;
pub mod journals;
pub mod todos;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Default server URL when `LOGBOOK_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Error body the server sends with every failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_message: String,
}

/// HTTP client for the logbook API.
#[derive(Debug, Clone)]
pub struct LogbookClient {
    client: reqwest::Client,
    base_url: String,
}

impl LogbookClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (LOGBOOK_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LOGBOOK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Turn a non-2xx response into an error, preferring the server's `statusMessage`.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status();
    if status.as_u16() == 404 {
        return ClientError::NotFound {
            resource: response.url().path().to_string(),
        };
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.status_message)
        .unwrap_or(text);

    ClientError::ServerError {
        status: status.as_u16(),
        message,
    }
}
