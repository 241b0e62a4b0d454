pub mod auth;
pub mod error;
pub mod health;
pub mod journals;
pub mod todos;

pub use error::ApiError;
