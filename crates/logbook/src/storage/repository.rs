//! SQL repository implementation.
//!
//! Implements the repository traits from `logbook_core::storage` on top of any
//! [`SqlEngine`], so the same queries run against SQLite and D1.

use std::sync::Arc;

use async_trait::async_trait;

use logbook_core::journal::{Journal, NewTodo, Todo, UpdateTodoRequest};
use logbook_core::storage::{
    JournalRepository, RepositoryError, Result, SqlEngine, SqlValue, TodoRepository,
};

use super::conversions::{format_datetime, now, row_to_journal, row_to_todo, rows_to};
use super::schema;

/// Repository for journals and todos over a shared engine.
#[derive(Clone)]
pub struct SqlRepository {
    engine: Arc<dyn SqlEngine>,
}

impl SqlRepository {
    pub fn new(engine: Arc<dyn SqlEngine>) -> Self {
        Self { engine }
    }

    /// Ensure the tables and indexes exist. Safe to run on every start.
    ///
    /// Also adds the `priority` column to todos tables that predate it.
    pub async fn init_schema(&self) -> Result<()> {
        for statement in schema::SCHEMA_STATEMENTS {
            self.engine.execute(statement, vec![]).await?;
        }

        let columns = self
            .engine
            .query(schema::SELECT_TODOS_COLUMNS, vec![])
            .await?;
        let has_priority = columns
            .iter()
            .any(|column| column.get("name").and_then(|v| v.as_str()) == Some("priority"));

        if !has_priority {
            tracing::info!(engine = self.engine.name(), "Adding priority column to todos");
            self.engine
                .execute(schema::ADD_TODOS_PRIORITY_COLUMN, vec![])
                .await?;
        }

        tracing::debug!(engine = self.engine.name(), "Schema ready");
        Ok(())
    }

    async fn fetch_journal(&self, sql: &str, params: Vec<SqlValue>) -> Result<Option<Journal>> {
        let rows = self.engine.query(sql, params).await?;
        rows.first().map(row_to_journal).transpose()
    }

    async fn fetch_todo(&self, sql: &str, params: Vec<SqlValue>) -> Result<Option<Todo>> {
        let rows = self.engine.query(sql, params).await?;
        rows.first().map(row_to_todo).transpose()
    }
}

// ============================================================================
// JournalRepository implementation
// ============================================================================

#[async_trait]
impl JournalRepository for SqlRepository {
    async fn list_journals(&self) -> Result<Vec<Journal>> {
        let rows = self.engine.query(schema::SELECT_JOURNALS, vec![]).await?;
        rows_to(&rows, row_to_journal)
    }

    async fn get_journal(&self, id: i64) -> Result<Option<Journal>> {
        self.fetch_journal(schema::SELECT_JOURNAL_BY_ID, vec![id.into()])
            .await
    }

    async fn create_journal(&self, text: &str) -> Result<Journal> {
        let timestamp = format_datetime(&now());

        let outcome = self
            .engine
            .execute(
                schema::INSERT_JOURNAL,
                vec![text.into(), timestamp.clone().into(), timestamp.into()],
            )
            .await?;

        let created = match outcome.last_insert_id {
            Some(id) => {
                self.fetch_journal(schema::SELECT_JOURNAL_BY_ID, vec![id.into()])
                    .await?
            }
            None => self.fetch_journal(schema::SELECT_LATEST_JOURNAL, vec![]).await?,
        };

        created.ok_or_else(|| {
            RepositoryError::QueryFailed("created journal could not be read back".to_string())
        })
    }

    async fn update_journal(&self, id: i64, text: &str) -> Result<Option<Journal>> {
        let Some(current) = self.get_journal(id).await? else {
            return Ok(None);
        };

        let updated_at = now();
        self.engine
            .execute(
                schema::UPDATE_JOURNAL,
                vec![text.into(), format_datetime(&updated_at).into(), id.into()],
            )
            .await?;

        Ok(Some(Journal {
            text: text.to_string(),
            updated_at,
            ..current
        }))
    }

    async fn delete_journal(&self, id: i64) -> Result<()> {
        let timestamp = format_datetime(&now());

        let unlinked = self
            .engine
            .execute(
                schema::UNLINK_TODOS_FROM_JOURNAL,
                vec![timestamp.into(), id.into()],
            )
            .await?;
        let deleted = self
            .engine
            .execute(schema::DELETE_JOURNAL, vec![id.into()])
            .await?;

        tracing::debug!(
            journal_id = id,
            unlinked_todos = unlinked.changes,
            deleted = deleted.changes,
            "Deleted journal"
        );
        Ok(())
    }
}

// ============================================================================
// TodoRepository implementation
// ============================================================================

#[async_trait]
impl TodoRepository for SqlRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let rows = self.engine.query(schema::SELECT_TODOS, vec![]).await?;
        rows_to(&rows, row_to_todo)
    }

    async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        self.fetch_todo(schema::SELECT_TODO_BY_ID, vec![id.into()])
            .await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let timestamp = format_datetime(&now());

        let outcome = self
            .engine
            .execute(
                schema::INSERT_TODO,
                vec![
                    todo.text.as_str().into(),
                    todo.priority.as_str().into(),
                    todo.journal_id.into(),
                    timestamp.clone().into(),
                    timestamp.into(),
                ],
            )
            .await?;

        let created = match outcome.last_insert_id {
            Some(id) => {
                self.fetch_todo(schema::SELECT_TODO_BY_ID, vec![id.into()])
                    .await?
            }
            None => self.fetch_todo(schema::SELECT_LATEST_TODO, vec![]).await?,
        };

        created.ok_or_else(|| {
            RepositoryError::QueryFailed("created todo could not be read back".to_string())
        })
    }

    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Option<Todo>> {
        let Some(mut todo) = self.get_todo(id).await? else {
            return Ok(None);
        };

        update.apply_to(&mut todo);
        todo.updated_at = now();

        self.engine
            .execute(
                schema::UPDATE_TODO,
                vec![
                    todo.text.as_str().into(),
                    todo.done.into(),
                    todo.priority.as_str().into(),
                    format_datetime(&todo.updated_at).into(),
                    id.into(),
                ],
            )
            .await?;

        Ok(Some(todo))
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.engine
            .execute(schema::DELETE_TODO, vec![id.into()])
            .await?;
        Ok(())
    }

    async fn list_todos_by_journal(&self, journal_id: i64) -> Result<Vec<Todo>> {
        let rows = self
            .engine
            .query(schema::SELECT_TODOS_BY_JOURNAL, vec![journal_id.into()])
            .await?;
        rows_to(&rows, row_to_todo)
    }
}
