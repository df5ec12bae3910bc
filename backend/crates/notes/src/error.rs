//! Note Error Types
//!
//! Note-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type NoteResult<T> = Result<T, NoteError>;

#[derive(Debug, Error)]
pub enum NoteError {
    /// Title or content empty or whitespace only
    #[error("Title and content are required")]
    MissingFields,

    #[error("{0}")]
    Validation(String),

    /// Path segment is not a note id
    #[error("Invalid ID")]
    InvalidId,

    #[error("Invalid status filter")]
    InvalidStatusFilter,

    /// Missing, or owned by someone else. Deliberately the same answer.
    #[error("Note not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoteError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::MissingFields
            | NoteError::Validation(_)
            | NoteError::InvalidId
            | NoteError::InvalidStatusFilter => ErrorKind::BadRequest,
            NoteError::NotFound => ErrorKind::NotFound,
            NoteError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_),
            ) => ErrorKind::ServiceUnavailable,
            NoteError::Database(_) | NoteError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Infrastructure details never reach the message.
    pub fn into_app_error(self) -> AppError {
        match self {
            NoteError::Database(e) => AppError::from(e),
            NoteError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            NoteError::Database(e) => {
                tracing::error!(error = %e, "Note database error");
            }
            NoteError::Internal(msg) => {
                tracing::error!(message = %msg, "Note internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Note error");
            }
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for NoteError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            NoteError::Validation(err.message().to_string())
        } else {
            NoteError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: NoteError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors_render_their_message() {
        for (err, status, message) in [
            (NoteError::MissingFields, 400, "Title and content are required"),
            (NoteError::InvalidId, 400, "Invalid ID"),
            (NoteError::InvalidStatusFilter, 400, "Invalid status filter"),
            (NoteError::NotFound, 404, "Note not found"),
        ] {
            let (got_status, body) = render(err).await;
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(body["error"], message);
        }
    }

    #[tokio::test]
    async fn test_server_errors_are_opaque() {
        let (status, body) = render(NoteError::Internal("mutex poisoned".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        let (status, body) = render(NoteError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database unavailable");
    }
}
