use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::session::{SessionId, SessionRegistry, SharedStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live sessions and their record stores.
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }

    /// Look up a session's store or fail with `SESSION_NOT_FOUND`.
    pub async fn store(&self, id: SessionId) -> AppResult<SharedStore> {
        self.sessions
            .store(id)
            .await
            .ok_or(AppError::SessionNotFound(id))
    }
}
