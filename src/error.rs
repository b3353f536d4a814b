/*
 * Responsibility
 * - Transport-level ApiError definition (AppError)
 * - IntoResponse impl (HTTP status / JSON error body)
 * - Map CommentError / request decoding failures onto a stable error code
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::CommentError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound {
        code: &'static str,
        resource: &'static str,
    },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, resource: &'static str) -> Self {
        Self::NotFound { code, resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::NotFound { code, resource } => {
                (StatusCode::NOT_FOUND, code, format!("{resource} not found."))
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CommentError> for AppError {
    fn from(e: CommentError) -> Self {
        match e {
            // Client supplied a malformed comment id
            CommentError::InvalidId => AppError::bad_request("INVALID_OBJECT_ID", "invalid id"),
            CommentError::NotFound => AppError::not_found("COMMENT_NOT_FOUND", "comment"),
            // Storage details stay in the log, never in the response body.
            CommentError::Repo(err) => {
                tracing::error!(error = ?err, "comment repository failure");
                AppError::Internal
            }
        }
    }
}
