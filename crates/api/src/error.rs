use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::{CoreError, ImportError};
use serde_json::json;

use crate::session::SessionId;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The path referenced a session that does not exist (or has ended).
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::Core(CoreError::Import(err))
    }
}

impl From<roster_core::error::IndexError> for AppError {
    fn from(err: roster_core::error::IndexError) -> Self {
        AppError::Core(CoreError::Index(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Import(ImportError::UnsupportedFormat(_)) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_FORMAT",
                    core.to_string(),
                ),
                CoreError::Import(ImportError::MissingColumns(_)) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MISSING_COLUMNS",
                    core.to_string(),
                ),
                CoreError::Import(ImportError::Parse(_)) => {
                    (StatusCode::BAD_REQUEST, "PARSE_ERROR", core.to_string())
                }
                CoreError::Index(_) => (
                    StatusCode::NOT_FOUND,
                    "INDEX_OUT_OF_BOUNDS",
                    core.to_string(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::SessionNotFound(_) => (
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
                self.to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::error::IndexError;

    async fn envelope(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let (status, body) =
            envelope(AppError::InternalError("Import task failed: panicked".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn index_error_is_not_found() {
        let (status, body) = envelope(IndexError { index: 3, len: 1 }.into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "INDEX_OUT_OF_BOUNDS");
    }
}
