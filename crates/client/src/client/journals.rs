//! Journal API operations.

use logbook_core::journal::{CreateJournalRequest, Journal, Todo, UpdateJournalRequest};

use super::LogbookClient;
use crate::error::Result;

impl LogbookClient {
    /// List all journals, newest first.
    pub async fn list_journals(&self) -> Result<Vec<Journal>> {
        let response = self.client.get(self.url("/api/journals")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new journal.
    pub async fn create_journal(&self, text: &str) -> Result<Journal> {
        let response = self
            .client
            .post(self.url("/api/journals"))
            .json(&CreateJournalRequest::new(text))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get journal by ID.
    pub async fn get_journal(&self, id: i64) -> Result<Journal> {
        let response = self
            .client
            .get(self.url(&format!("/api/journals/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace a journal's text.
    pub async fn update_journal(&self, id: i64, text: &str) -> Result<Journal> {
        let response = self
            .client
            .put(self.url(&format!("/api/journals/{}", id)))
            .json(&UpdateJournalRequest::new(text))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete journal by ID. Its todos are kept, unlinked.
    pub async fn delete_journal(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/journals/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }

    /// List the todos linked to a journal, oldest first.
    pub async fn list_journal_todos(&self, id: i64) -> Result<Vec<Todo>> {
        let response = self
            .client
            .get(self.url(&format!("/api/journals/{}/todos", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
