//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached only through trait objects, so the
//! handlers never know which engine is behind them.

use std::sync::Arc;

use logbook_core::auth::Credentials;
use logbook_core::storage::{JournalRepository, SqlEngine, TodoRepository};

use crate::config::Config;
use crate::sessions::SessionStore;
use crate::storage::{self, SqlRepository};

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// Journal repository.
    pub journals: Arc<dyn JournalRepository>,
    /// Todo repository.
    pub todos: Arc<dyn TodoRepository>,
    /// The engine both repositories run on, used by the health check.
    pub engine: Arc<dyn SqlEngine>,
    /// Logged-in browser sessions.
    pub sessions: SessionStore,
    /// Credentials accepted by the login endpoint.
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Connects the configured engine and bootstraps the schema.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let engine = storage::connect(&config).await?;
        Ok(Self::with_engine(engine, config.credentials()).await?)
    }

    /// Builds the state on an existing engine, running the schema step first.
    pub async fn with_engine(
        engine: Arc<dyn SqlEngine>,
        credentials: Credentials,
    ) -> logbook_core::storage::Result<Self> {
        let repository = Arc::new(SqlRepository::new(engine.clone()));
        repository.init_schema().await?;

        tracing::info!(engine = engine.name(), "Storage ready");

        Ok(Self {
            journals: repository.clone(),
            todos: repository,
            engine,
            sessions: SessionStore::new(),
            credentials: Arc::new(credentials),
        })
    }

    /// State over a fresh in-memory SQLite engine with the default credentials.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        let engine = storage::sqlite::SqliteEngine::in_memory()
            .await
            .expect("in-memory engine");
        Self::with_engine(Arc::new(engine), Config::default().credentials())
            .await
            .expect("schema bootstrap")
    }
}
