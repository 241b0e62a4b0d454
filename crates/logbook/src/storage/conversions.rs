//! Row conversion functions.
//!
//! Pure functions for converting between engine rows and domain types.
//! Both engines return rows as JSON objects, so these are testable in
//! isolation without database access.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde_json::Value;

use logbook_core::journal::{Journal, Priority, Todo};
use logbook_core::storage::{RepositoryError, Result, SqlRow};

/// Format written by SQLite's `CURRENT_TIMESTAMP` default.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Journal conversions
// ============================================================================

/// Convert a row to a Journal.
///
/// Expected columns: id, text, created_at, updated_at
pub fn row_to_journal(row: &SqlRow) -> Result<Journal> {
    Ok(Journal {
        id: get_i64(row, "id")?,
        text: get_string(row, "text")?,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}

// ============================================================================
// Todo conversions
// ============================================================================

/// Convert a row to a Todo.
///
/// Expected columns: id, text, done, priority, journal_id, created_at, updated_at
pub fn row_to_todo(row: &SqlRow) -> Result<Todo> {
    let priority = match row.get("priority") {
        None | Some(Value::Null) => Priority::default(),
        Some(Value::String(s)) => s
            .parse()
            .map_err(|e| RepositoryError::Serialization(format!("{e}")))?,
        Some(other) => return Err(unexpected("priority", other)),
    };

    let done = match row.get("done") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0).unwrap_or(false),
        Some(other) => return Err(unexpected("done", other)),
    };

    let journal_id = match row.get("journal_id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_i64()
                .ok_or_else(|| unexpected("journal_id", value))?,
        ),
    };

    Ok(Todo {
        id: get_i64(row, "id")?,
        text: get_string(row, "text")?,
        done,
        priority,
        journal_id,
        created_at: get_datetime(row, "created_at")?,
        updated_at: get_datetime(row, "updated_at")?,
    })
}

/// Convert every row, failing on the first bad one.
pub fn rows_to<T>(rows: &[SqlRow], convert: fn(&SqlRow) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().map(convert).collect()
}

// ============================================================================
// Helper functions
// ============================================================================

/// The current time at the precision timestamps are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Format a DateTime for storage (RFC 3339, milliseconds, `Z` suffix).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp. Accepts RFC 3339 and the SQLite default format (as UTC).
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT).map(|dt| dt.and_utc())
        })
        .map_err(|e| RepositoryError::Serialization(format!("invalid timestamp {s:?}: {e}")))
}

fn get_i64(row: &SqlRow, column: &str) -> Result<i64> {
    match row.get(column) {
        Some(value) => value.as_i64().ok_or_else(|| unexpected(column, value)),
        None => Err(missing(column)),
    }
}

fn get_string(row: &SqlRow, column: &str) -> Result<String> {
    match row.get(column) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(unexpected(column, other)),
        None => Err(missing(column)),
    }
}

fn get_datetime(row: &SqlRow, column: &str) -> Result<DateTime<Utc>> {
    parse_datetime(&get_string(row, column)?)
}

fn missing(column: &str) -> RepositoryError {
    RepositoryError::Serialization(format!("missing column: {column}"))
}

fn unexpected(column: &str, value: &Value) -> RepositoryError {
    RepositoryError::Serialization(format!("unexpected value for {column}: {value}"))
}
