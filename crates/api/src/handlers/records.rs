//! Handlers for the roster table: listing, the add form, per-row
//! update/delete, and the dashboard counts.
//!
//! Rows are addressed by their current position. After a delete every later
//! row moves up by one, so clients should re-list before issuing another
//! positional request.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::record::CollaboratorRecord;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::session::SessionId;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// A record paired with its current position.
#[derive(Debug, Serialize)]
pub struct IndexedRecord {
    pub index: usize,
    #[serde(flatten)]
    pub record: CollaboratorRecord,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/sessions/{session_id}/records
pub async fn list_records(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let store = store.lock().await;

    let records: Vec<IndexedRecord> = store
        .records()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, record)| IndexedRecord { index, record })
        .collect();

    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/sessions/{session_id}/records
///
/// Append a record. Absent fields are stored as empty strings.
pub async fn add_record(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
    AppJson(record): AppJson<CollaboratorRecord>,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let index = store.lock().await.add(record.clone());

    tracing::info!(%session_id, index, "Record added");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IndexedRecord { index, record },
        }),
    ))
}

/// PUT /api/v1/sessions/{session_id}/records/{index}
///
/// Replace the record at `index` with the submitted one.
pub async fn update_record(
    State(state): State<AppState>,
    AppPath((session_id, index)): AppPath<(SessionId, usize)>,
    AppJson(record): AppJson<CollaboratorRecord>,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    store.lock().await.update_at(index, record.clone())?;

    tracing::info!(%session_id, index, "Record updated");
    Ok(Json(DataResponse {
        data: IndexedRecord { index, record },
    }))
}

/// DELETE /api/v1/sessions/{session_id}/records/{index}
pub async fn delete_record(
    State(state): State<AppState>,
    AppPath((session_id, index)): AppPath<(SessionId, usize)>,
) -> AppResult<StatusCode> {
    let store = state.store(session_id).await?;
    let remaining = {
        let mut store = store.lock().await;
        store.delete_at(index)?;
        store.len()
    };

    tracing::info!(%session_id, index, remaining, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/{session_id}/summary
///
/// Total, active and inactive counts for the dashboard.
pub async fn get_summary(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let summary = store.lock().await.summary();
    Ok(Json(DataResponse { data: summary }))
}
