use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::{
    backup::Progress,
    params_from_iter,
    types::{Value as SqliteValue, ValueRef},
    DatabaseName,
};
use serde_json::Value;
use tokio_rusqlite::Connection;

use logbook_core::storage::{ExecOutcome, Result, SqlEngine, SqlRow, SqlValue};

use super::error::{map_open_error, map_tokio_rusqlite_error};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite engine with an in-memory working database.
///
/// `tokio-rusqlite` runs every call on one background thread, so statements
/// and the file write that follows them never interleave.
pub struct SqliteEngine {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteEngine {
    /// Opens the engine backed by `path`.
    ///
    /// An existing file is restored into memory. Otherwise the database starts
    /// empty and the file is first written by the next mutating statement.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_in_memory().await.map_err(map_open_error)?;

        let source = path.clone();
        let restored = conn
            .call(move |conn| {
                let restored = source.exists();
                if restored {
                    conn.restore(DatabaseName::Main, &source, None::<fn(Progress)>)
                        .map_err(wrap_err)?;
                } else if let Some(parent) = source.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)
                            .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
                    }
                }
                conn.pragma_update(None, "foreign_keys", true)
                    .map_err(wrap_err)?;
                Ok(restored)
            })
            .await
            .map_err(map_open_error)?;

        tracing::info!(path = %path.display(), restored, "Opened SQLite database");

        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// Creates an engine with no backing file.
    ///
    /// Useful for testing - data is lost when the engine is dropped.
    pub async fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await.map_err(map_open_error)?;

        conn.call(|conn| {
            conn.pragma_update(None, "foreign_keys", true)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_open_error)?;

        Ok(Self { conn, path: None })
    }
}

#[async_trait]
impl SqlEngine for SqliteEngine {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn query(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<SqlRow>> {
        let sql = sql.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let columns: Vec<String> = stmt
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect();

                let mut rows = stmt
                    .query(params_from_iter(params.into_iter().map(to_sqlite_value)))
                    .map_err(wrap_err)?;

                let mut result = Vec::new();
                while let Some(row) = rows.next().map_err(wrap_err)? {
                    let mut record = SqlRow::new();
                    for (index, column) in columns.iter().enumerate() {
                        let value = row.get_ref(index).map_err(wrap_err)?;
                        record.insert(column.clone(), value_ref_to_json(value));
                    }
                    result.push(record);
                }
                Ok(result)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Runs one statement, then writes the whole database over the backing file.
    ///
    /// `last_insert_id` is the rowid of this statement's insert, read in the
    /// same serialized call. If the file write fails the caller gets an error,
    /// but the change stays in the in-memory database and is visible to later
    /// reads. It reaches the file with the next successful write.
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<ExecOutcome> {
        let inserts = is_insert(sql);
        let sql = sql.to_string();
        let path = self.path.clone();

        self.conn
            .call(move |conn| {
                let changes = conn
                    .execute(&sql, params_from_iter(params.into_iter().map(to_sqlite_value)))
                    .map_err(wrap_err)?;
                let last_insert_id = (inserts && changes > 0).then(|| conn.last_insert_rowid());

                if let Some(path) = &path {
                    conn.backup(DatabaseName::Main, path, None)
                        .map_err(wrap_err)?;
                }

                Ok(ExecOutcome {
                    changes: changes as u64,
                    last_insert_id,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

/// True for statements whose rowid SQLite reports through `last_insert_rowid`.
fn is_insert(sql: &str) -> bool {
    let head: String = sql
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    head.eq_ignore_ascii_case("insert") || head.eq_ignore_ascii_case("replace")
}

/// Convert an engine-neutral parameter to a SQLite value.
fn to_sqlite_value(value: SqlValue) -> SqliteValue {
    match value {
        SqlValue::Null => SqliteValue::Null,
        SqlValue::Integer(i) => SqliteValue::Integer(i),
        SqlValue::Real(f) => SqliteValue::Real(f),
        SqlValue::Text(s) => SqliteValue::Text(s),
    }
}

/// Convert a SQLite column value to JSON.
fn value_ref_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}
