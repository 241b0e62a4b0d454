//! Login operation.

use logbook_core::auth::{LoginRequest, LoginResponse};

use super::LogbookClient;
use crate::error::Result;

impl LogbookClient {
    /// Check credentials against the server.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }
}
