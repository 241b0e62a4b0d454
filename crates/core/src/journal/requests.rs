//! API request types for journal and todo operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! The server decodes them leniently (see [`crate::serde`]) and validates them before
//! anything reaches storage.

use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_optional_flag, deserialize_optional_id, deserialize_optional_priority,
};

use super::error::ValidationError;
use super::operations::validate_text;
use super::types::{Priority, Todo};

/// Request payload for creating a journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJournalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CreateJournalRequest {
    /// Create a request with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Returns the journal text if it is present and not blank.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        validate_text(self.text.as_deref())
    }
}

/// Request payload for replacing a journal's text.
///
/// `text` is required, with the same rules as on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJournalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl UpdateJournalRequest {
    /// Create a request with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Returns the journal text if it is present and not blank.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        validate_text(self.text.as_deref())
    }
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

impl CreateTodoRequest {
    /// Create a request with just the todo text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            journal_id: None,
            priority: None,
        }
    }

    /// Link the todo to a journal.
    pub fn with_journal(mut self, journal_id: i64) -> Self {
        self.journal_id = Some(journal_id);
        self
    }

    /// Set the todo priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Validate and convert into the storage input, defaulting the priority.
    pub fn into_new_todo(self) -> Result<NewTodo, ValidationError> {
        validate_text(self.text.as_deref())?;

        Ok(NewTodo {
            text: self.text.unwrap_or_default(),
            journal_id: self.journal_id,
            priority: self.priority.unwrap_or_default(),
        })
    }
}

/// A validated todo, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub journal_id: Option<i64>,
    pub priority: Priority,
}

/// Partial update for a todo. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub done: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

impl UpdateTodoRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the todo text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// Set the todo priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none() && self.priority.is_none()
    }

    /// A text that is present must not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.text {
            Some(text) => validate_text(Some(text)).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Apply updates to an existing todo. Timestamps are left to the caller.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(text) = &self.text {
            todo.text = text.clone();
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}
