//! Schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQL repository,
//! following the Functional Core pattern - pure data, no I/O. Every statement
//! uses numbered parameters (`?1`, `?2`, ...), which SQLite and D1 both accept.

/// SQL statement to create the journals table.
pub const CREATE_JOURNALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS journals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQL statement to create the todos table.
pub const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    done INTEGER DEFAULT 0,
    priority TEXT DEFAULT 'medium',
    journal_id INTEGER NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (journal_id) REFERENCES journals(id) ON DELETE SET NULL
)
"#;

pub const CREATE_TODOS_JOURNAL_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_todos_journal_id ON todos(journal_id)";

pub const CREATE_TODOS_DONE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_todos_done ON todos(done)";

/// Schema statements, in execution order. Each one is idempotent.
pub const SCHEMA_STATEMENTS: [&str; 4] = [
    CREATE_JOURNALS_TABLE,
    CREATE_TODOS_TABLE,
    CREATE_TODOS_JOURNAL_ID_INDEX,
    CREATE_TODOS_DONE_INDEX,
];

/// Lists the columns of the todos table, one row per column with a `name` field.
pub const SELECT_TODOS_COLUMNS: &str = "PRAGMA table_info(todos)";

/// Adds the priority column to todos tables created before it existed.
pub const ADD_TODOS_PRIORITY_COLUMN: &str =
    "ALTER TABLE todos ADD COLUMN priority TEXT DEFAULT 'medium'";

// Journal queries
pub const SELECT_JOURNALS: &str = r#"
SELECT id, text, created_at, updated_at
FROM journals
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_JOURNAL_BY_ID: &str = r#"
SELECT id, text, created_at, updated_at
FROM journals
WHERE id = ?1
"#;

pub const SELECT_LATEST_JOURNAL: &str = r#"
SELECT id, text, created_at, updated_at
FROM journals
ORDER BY id DESC
LIMIT 1
"#;

pub const INSERT_JOURNAL: &str = r#"
INSERT INTO journals (text, created_at, updated_at)
VALUES (?1, ?2, ?3)
"#;

pub const UPDATE_JOURNAL: &str = r#"
UPDATE journals
SET text = ?1, updated_at = ?2
WHERE id = ?3
"#;

pub const DELETE_JOURNAL: &str = "DELETE FROM journals WHERE id = ?1";

/// Clears the journal link of every todo that references the journal.
pub const UNLINK_TODOS_FROM_JOURNAL: &str = r#"
UPDATE todos
SET journal_id = NULL, updated_at = ?1
WHERE journal_id = ?2
"#;

// Todo queries
pub const SELECT_TODOS: &str = r#"
SELECT id, text, done, priority, journal_id, created_at, updated_at
FROM todos
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, text, done, priority, journal_id, created_at, updated_at
FROM todos
WHERE id = ?1
"#;

pub const SELECT_TODOS_BY_JOURNAL: &str = r#"
SELECT id, text, done, priority, journal_id, created_at, updated_at
FROM todos
WHERE journal_id = ?1
ORDER BY created_at ASC, id ASC
"#;

pub const SELECT_LATEST_TODO: &str = r#"
SELECT id, text, done, priority, journal_id, created_at, updated_at
FROM todos
ORDER BY id DESC
LIMIT 1
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (text, done, priority, journal_id, created_at, updated_at)
VALUES (?1, 0, ?2, ?3, ?4, ?5)
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET text = ?1, done = ?2, priority = ?3, updated_at = ?4
WHERE id = ?5
"#;

pub const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
