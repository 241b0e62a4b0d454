//! In-memory login sessions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use logbook_core::auth::{generate_session_id, Session, SessionId};

/// Name of the cookie that carries the session id.
pub const SESSION_COOKIE: &str = "logbook_session";

/// In-memory session store.
///
/// Stores sessions in a HashMap wrapped in `Arc<RwLock<_>>`. Sessions are
/// not persisted and are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `username` and returns it.
    pub async fn create(&self, username: &str) -> Session {
        let session = Session {
            id: generate_session_id(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.as_str().to_string(), session.clone());
        session
    }

    pub async fn get(&self, id: &SessionId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(id.as_str()).cloned()
    }

    /// Removes a session. Removing an unknown id is a no-op.
    pub async fn delete(&self, id: &SessionId) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
    }
}
