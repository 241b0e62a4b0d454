use uuid::Uuid;

use super::{AuthError, Credentials, LoginRequest, SessionId};

/// Generate a random session ID.
pub fn generate_session_id() -> SessionId {
    SessionId::new(Uuid::new_v4().simple().to_string())
}

/// Check a login attempt against the configured credentials.
pub fn verify_credentials(
    request: &LoginRequest,
    expected: &Credentials,
) -> Result<(), AuthError> {
    if request.username == expected.username && request.password == expected.password {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
