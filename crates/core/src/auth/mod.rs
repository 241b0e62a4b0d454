mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{generate_session_id, verify_credentials};
pub use types::{
    Credentials, LoginRequest, LoginResponse, Session, SessionId, SessionStatus, SessionUser,
};
