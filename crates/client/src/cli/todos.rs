//! Todo CLI commands.

use clap::{Parser, Subcommand};
use logbook_core::journal::Priority;

/// Todo management commands.
#[derive(Debug, Parser)]
pub struct TodosCommand {
    #[command(subcommand)]
    pub action: TodosAction,
}

/// Available todo actions.
#[derive(Debug, Subcommand)]
pub enum TodosAction {
    /// List all todos.
    List,
    /// Create a new todo.
    Create {
        /// Todo text.
        text: String,
        /// Journal to link the todo to.
        #[arg(long)]
        journal_id: Option<i64>,
        /// Priority (low, medium, high).
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Get todo by ID.
    Get {
        /// Todo ID.
        id: i64,
    },
    /// Update a todo. Omitted fields are left unchanged.
    Update {
        /// Todo ID.
        id: i64,
        /// New text.
        #[arg(long)]
        text: Option<String>,
        /// Mark done (true) or open (false).
        #[arg(long)]
        done: Option<bool>,
        /// New priority.
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Delete todo by ID.
    Delete {
        /// Todo ID.
        id: i64,
    },
}
