//! Journal CLI commands.

use clap::{Parser, Subcommand};

/// Journal management commands.
#[derive(Debug, Parser)]
pub struct JournalsCommand {
    #[command(subcommand)]
    pub action: JournalsAction,
}

/// Available journal actions.
#[derive(Debug, Subcommand)]
pub enum JournalsAction {
    /// List all journals.
    List,
    /// Create a new journal.
    Create {
        /// Journal text.
        text: String,
    },
    /// Get journal by ID.
    Get {
        /// Journal ID.
        id: i64,
    },
    /// Replace a journal's text.
    Update {
        /// Journal ID.
        id: i64,
        /// New text.
        text: String,
    },
    /// Delete journal by ID.
    Delete {
        /// Journal ID.
        id: i64,
    },
    /// List the todos linked to a journal.
    Todos {
        /// Journal ID.
        id: i64,
    },
}
