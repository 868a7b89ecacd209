//! Handlers for bulk import (raw body or multipart upload) and CSV export.
//!
//! An import is parsed and validated before the session lock is taken. The
//! store is only touched once the whole file is known to be good, so a failed
//! import leaves the previous roster in place.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use roster_core::import::import;
use roster_core::store::Summary;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::session::{SessionId, SharedStore};
use crate::state::AppState;

/// Result of a successful import.
#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub summary: Summary,
}

/// Validate `bytes` and, only on success, replace the roster with them.
/// Parsing runs on the blocking pool.
async fn replace_from_upload(
    session_id: SessionId,
    store: &SharedStore,
    bytes: Bytes,
    content_type: String,
) -> AppResult<ImportOutcome> {
    let declared = content_type.clone();
    let parsed = tokio::task::spawn_blocking(move || import(&bytes, &declared))
        .await
        .map_err(|e| AppError::InternalError(format!("Import task failed: {e}")))?;

    let records = parsed.map_err(|err| {
        tracing::warn!(%session_id, %content_type, error = %err, "Import rejected");
        err
    })?;

    let imported = records.len();
    let summary = {
        let mut store = store.lock().await;
        store.replace_all(records);
        store.summary()
    };

    tracing::info!(%session_id, %content_type, imported, "Roster replaced from import");
    Ok(ImportOutcome { imported, summary })
}

/// POST /api/v1/sessions/{session_id}/import
///
/// The request body is the file; its `Content-Type` header is the declared
/// format.
pub async fn import_body(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let outcome = replace_from_upload(session_id, &store, body, content_type).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// POST /api/v1/sessions/{session_id}/upload
///
/// Accepts a multipart form with a required `file` field. The part's own
/// content type is the declared format.
pub async fn import_multipart(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((content_type, data));
    }

    let (content_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let outcome = replace_from_upload(session_id, &store, data, content_type).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/sessions/{session_id}/export
///
/// Download the roster as `lista_colaboradores.csv`.
pub async fn export_csv(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<SessionId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store(session_id).await?;
    let file = store.lock().await.export()?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    ))
}
