//! Handlers for opening and closing sessions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::session::SessionId;
use crate::state::AppState;

/// POST /api/v1/sessions
///
/// Open a session with an empty roster.
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let info = state.sessions.create().await;
    tracing::info!(session_id = %info.id, "Session created");
    (StatusCode::CREATED, Json(DataResponse { data: info }))
}

/// GET /api/v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
) -> AppResult<impl IntoResponse> {
    let info = state
        .sessions
        .info(session_id)
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;
    Ok(Json(DataResponse { data: info }))
}

/// DELETE /api/v1/sessions/{session_id}
///
/// End the session. Its roster is discarded.
pub async fn delete_session(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
) -> AppResult<StatusCode> {
    if !state.sessions.remove(session_id).await {
        return Err(AppError::SessionNotFound(session_id));
    }
    tracing::info!(%session_id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}
