//! Per-session record stores.
//!
//! Each session owns exactly one [`RecordStore`]. Handlers hold the
//! session's mutex for the whole of one operation, so a store never sees two
//! writers at once. Stores are never shared between sessions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use roster_core::store::RecordStore;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SessionId = Uuid;

/// A session's store, locked per operation.
pub type SharedStore = Arc<Mutex<RecordStore>>;

/// Public description of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
}

struct Session {
    info: SessionInfo,
    store: SharedStore,
}

/// Registry of live sessions.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session with an empty store.
    pub async fn create(&self) -> SessionInfo {
        let info = SessionInfo {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let session = Session {
            info: info.clone(),
            store: Arc::new(Mutex::new(RecordStore::new())),
        };
        self.sessions.write().await.insert(info.id, session);
        info
    }

    pub async fn info(&self, id: SessionId) -> Option<SessionInfo> {
        self.sessions.read().await.get(&id).map(|s| s.info.clone())
    }

    pub async fn store(&self, id: SessionId) -> Option<SharedStore> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|s| Arc::clone(&s.store))
    }

    /// End a session and drop its store. Returns `false` if it was unknown.
    pub async fn remove(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::record::CollaboratorRecord;

    #[tokio::test]
    async fn create_starts_with_empty_store() {
        let registry = SessionRegistry::new();
        let info = registry.create().await;

        let store = registry.store(info.id).await.expect("session should exist");
        assert!(store.lock().await.is_empty());
        assert_eq!(registry.count().await, 1);
    }

    #[tokio::test]
    async fn sessions_do_not_share_stores() {
        let registry = SessionRegistry::new();
        let a = registry.create().await;
        let b = registry.create().await;

        registry
            .store(a.id)
            .await
            .unwrap()
            .lock()
            .await
            .add(CollaboratorRecord::default());

        assert_eq!(registry.store(a.id).await.unwrap().lock().await.len(), 1);
        assert_eq!(registry.store(b.id).await.unwrap().lock().await.len(), 0);
    }

    #[tokio::test]
    async fn remove_drops_session() {
        let registry = SessionRegistry::new();
        let info = registry.create().await;

        assert!(registry.remove(info.id).await);
        assert!(!registry.remove(info.id).await);
        assert!(registry.store(info.id).await.is_none());
        assert!(registry.info(info.id).await.is_none());
    }
}
