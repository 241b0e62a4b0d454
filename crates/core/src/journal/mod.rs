mod error;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use operations::{validate_id, validate_text};
pub use requests::{
    CreateJournalRequest, CreateTodoRequest, NewTodo, UpdateJournalRequest, UpdateTodoRequest,
};
pub use types::{Journal, ParsePriorityError, Priority, Todo};
