pub mod health;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                                       create (POST)
/// /sessions/{session_id}                          get, end (DELETE)
/// /sessions/{session_id}/records                  list, add (POST)
/// /sessions/{session_id}/records/{index}          update (PUT), delete
/// /sessions/{session_id}/summary                  total / active / inactive
/// /sessions/{session_id}/import                   raw-body import (POST)
/// /sessions/{session_id}/upload                   multipart import (POST)
/// /sessions/{session_id}/export                   CSV download
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/sessions", sessions::router())
}
