use async_trait::async_trait;

use crate::journal::{Journal, NewTodo, Todo, UpdateTodoRequest};

use super::{ExecOutcome, Result, SqlRow, SqlValue};

/// A relational engine that runs positional-parameter SQL.
///
/// Implementations must be safe to share across request tasks. Writes are
/// durable once `execute` returns.
#[async_trait]
pub trait SqlEngine: Send + Sync {
    /// Short engine name used in logs and health output.
    fn name(&self) -> &'static str;

    /// Runs a read statement and returns all rows.
    async fn query(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<SqlRow>>;

    /// Runs a mutating statement.
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<ExecOutcome>;
}

/// Repository for journal operations.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Lists all journals, newest first.
    async fn list_journals(&self) -> Result<Vec<Journal>>;

    /// Gets a journal by its ID.
    async fn get_journal(&self, id: i64) -> Result<Option<Journal>>;

    /// Creates a journal and returns the stored row.
    async fn create_journal(&self, text: &str) -> Result<Journal>;

    /// Replaces a journal's text. Returns `None` if the journal does not exist.
    async fn update_journal(&self, id: i64, text: &str) -> Result<Option<Journal>>;

    /// Deletes a journal, unlinking its todos first. Deleting a missing id is a no-op.
    async fn delete_journal(&self, id: i64) -> Result<()>;
}

/// Repository for todo operations.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists all todos, newest first.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Gets a todo by its ID.
    async fn get_todo(&self, id: i64) -> Result<Option<Todo>>;

    /// Creates a todo and returns the stored row.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo>;

    /// Merges the present fields into the stored todo. Returns `None` if it does not exist.
    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Option<Todo>>;

    /// Deletes a todo. Deleting a missing id is a no-op.
    async fn delete_todo(&self, id: i64) -> Result<()>;

    /// Lists the todos linked to a journal, oldest first.
    async fn list_todos_by_journal(&self, journal_id: i64) -> Result<Vec<Todo>>;
}
