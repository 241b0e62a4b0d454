//! Todo API operations.

use logbook_core::journal::{CreateTodoRequest, Todo, UpdateTodoRequest};

use super::LogbookClient;
use crate::error::Result;

impl LogbookClient {
    /// List all todos, newest first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let response = self.client.get(self.url("/api/todos")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new todo.
    pub async fn create_todo(&self, req: CreateTodoRequest) -> Result<Todo> {
        let response = self
            .client
            .post(self.url("/api/todos"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get todo by ID.
    pub async fn get_todo(&self, id: i64) -> Result<Todo> {
        let response = self
            .client
            .get(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update the fields set in `req`, leaving the rest untouched.
    pub async fn update_todo(&self, id: i64, req: UpdateTodoRequest) -> Result<Todo> {
        let response = self
            .client
            .put(self.url(&format!("/api/todos/{}", id)))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete todo by ID.
    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
