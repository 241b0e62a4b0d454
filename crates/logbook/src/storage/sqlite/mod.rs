//! File-backed SQLite engine.
//!
//! The working database lives in memory and is written over its backing file
//! after every mutating statement, using `rusqlite` through `tokio-rusqlite`.

mod engine;
mod error;

pub use engine::SqliteEngine;
