//! Storage engines and the repository built on them.
//!
//! The engine is picked once at startup: a fully configured D1 binding selects
//! Cloudflare D1, anything else falls back to the file-backed SQLite engine.

mod conversions;
pub mod d1;
mod repository;
mod schema;
pub mod sqlite;

use std::sync::Arc;

use logbook_core::storage::{Result, SqlEngine};

pub use repository::SqlRepository;

use crate::config::Config;
use d1::D1Engine;
use sqlite::SqliteEngine;

/// Construct the engine selected by the configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn SqlEngine>> {
    match &config.d1 {
        Some(d1) => {
            tracing::info!(
                engine = "d1",
                database_id = %d1.database_id,
                "Using Cloudflare D1 storage"
            );
            Ok(Arc::new(D1Engine::new(d1)?))
        }
        None => {
            tracing::info!(
                engine = "sqlite",
                path = %config.sqlite_path.display(),
                "Using file-backed SQLite storage"
            );
            Ok(Arc::new(SqliteEngine::open(&config.sqlite_path).await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::D1Config;

    #[tokio::test]
    async fn test_connect_defaults_to_sqlite() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            sqlite_path: dir.path().join("logbook.db"),
            ..Config::default()
        };

        let engine = connect(&config).await.unwrap();

        assert_eq!(engine.name(), "sqlite");
    }

    #[tokio::test]
    async fn test_connect_prefers_d1_binding() {
        let config = Config {
            d1: Some(D1Config {
                account_id: "acc".to_string(),
                database_id: "db".to_string(),
                api_token: "token".to_string(),
                api_base: "http://127.0.0.1:9".to_string(),
            }),
            ..Config::default()
        };

        let engine = connect(&config).await.unwrap();

        assert_eq!(engine.name(), "d1");
    }
}
