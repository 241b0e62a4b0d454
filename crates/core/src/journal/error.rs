use thiserror::Error;

/// Errors raised while validating journal and todo input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text required")]
    TextRequired,
    #[error("Invalid id: {0} (must be a positive integer)")]
    InvalidId(String),
    #[error("Journal {0} not found")]
    UnknownJournal(i64),
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}
