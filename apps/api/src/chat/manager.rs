//! Session registry — one entry per active browser session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::chat::session::ChatSession;

pub type SessionId = Uuid;

/// Holds every live chat session, keyed by id. Sessions are memory-only and
/// do not survive a process restart.
///
/// Each session sits behind its own `Mutex`; a message handler holds the lock
/// for the whole turn cycle, so concurrent submits to one session serialize.
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<ChatSession>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> (SessionId, Arc<Mutex<ChatSession>>) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(ChatSession::new()));
        self.sessions.write().await.insert(id, session.clone());
        info!("Session {id} created");
        (id, session)
    }

    pub async fn get(&self, id: &SessionId) -> Option<Arc<Mutex<ChatSession>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Removes a session. Returns `false` if the id was unknown.
    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!("Session {id} destroyed");
        }
        removed
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_same_session() {
        let manager = SessionManager::new();
        let (id, session) = manager.create().await;

        session.lock().await.append_user("hello");

        let fetched = manager.get(&id).await.expect("session should exist");
        assert_eq!(fetched.lock().await.all().len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let manager = SessionManager::new();
        assert!(manager.get(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_destroys_the_session() {
        let manager = SessionManager::new();
        let (id, _) = manager.create().await;

        assert!(manager.remove(&id).await);
        assert!(manager.get(&id).await.is_none());
        assert!(!manager.remove(&id).await);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let manager = SessionManager::new();
        let (a, session_a) = manager.create().await;
        let (b, _session_b) = manager.create().await;
        assert_ne!(a, b);

        session_a.lock().await.append_user("only in a");

        let fetched_b = manager.get(&b).await.unwrap();
        assert!(fetched_b.lock().await.all().is_empty());
    }
}
