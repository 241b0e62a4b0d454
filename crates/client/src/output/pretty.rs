//! Pretty output formatting.

use logbook_core::auth::LoginResponse;
use logbook_core::journal::{Journal, Todo};

use crate::client::health::StorageHealth;

/// Timestamp layout used in listings.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a journal for display.
pub fn format_journal(journal: &Journal) -> String {
    format!(
        "#{} {}\n  Created: {}\n  Updated: {}",
        journal.id,
        journal.text,
        journal.created_at.format(TIMESTAMP_FORMAT),
        journal.updated_at.format(TIMESTAMP_FORMAT)
    )
}

/// Format journals for display.
pub fn format_journals(journals: &[Journal]) -> String {
    if journals.is_empty() {
        return "No journals found.".to_string();
    }
    let mut output = format!("JOURNALS ({})\n", journals.len());
    output.push_str(&"-".repeat(40));
    for journal in journals {
        output.push_str(&format!("\n{}", format_journal(journal)));
        output.push('\n');
    }
    output
}

/// Format a todo for display.
pub fn format_todo(todo: &Todo) -> String {
    let check = if todo.done { "x" } else { " " };
    let mut output = format!(
        "[{}] #{} {} ({})",
        check, todo.id, todo.text, todo.priority
    );
    if let Some(journal_id) = todo.journal_id {
        output.push_str(&format!("\n  Journal: {}", journal_id));
    }
    output.push_str(&format!(
        "\n  Created: {}",
        todo.created_at.format(TIMESTAMP_FORMAT)
    ));
    output
}

/// Format todos for display.
pub fn format_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let open = todos.iter().filter(|t| !t.done).count();
    let mut output = format!("TODOS ({}, {} open)\n", todos.len(), open);
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}

/// Format a login result for display.
pub fn format_login(response: &LoginResponse) -> String {
    format!("Logged in as {}", response.user.username)
}

/// Format storage health for display.
pub fn format_health(health: &StorageHealth) -> String {
    let state = if health.healthy { "healthy" } else { "unhealthy" };
    match &health.error {
        Some(error) => format!("{} ({}): {}", state, health.engine, error),
        None => format!("{} ({})", state, health.engine),
    }
}
