//! Health check operations.

use serde::{Deserialize, Serialize};

use super::LogbookClient;
use crate::error::Result;

/// Storage health reported by `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageHealth {
    pub healthy: bool,
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogbookClient {
    /// Check storage health.
    pub async fn health(&self) -> Result<StorageHealth> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response).await
    }
}
