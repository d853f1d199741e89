use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use movies_core::error::CoreError;
use movies_db::error::StoreError;
use serde_json::json;

use crate::services::MovieError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`MovieError`] for service outcomes and [`StoreError`] for
/// persistence failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A refusal or failure from the movie service.
    #[error(transparent)]
    Movie(#[from] MovieError),

    /// A repository error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Movie outcomes have their own body shape.
            AppError::Movie(err) => return err.into_response(),

            AppError::Store(err) => classify_store_error(&err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for MovieError {
    /// Refused writes echo the submitted movie with `errorMessage` set;
    /// not-found refusals have an empty body.
    fn into_response(self) -> Response {
        match self {
            MovieError::Rejected { reason, movie } => {
                let status = core_status(&reason);
                match movie {
                    Some(movie) => (status, Json(movie)).into_response(),
                    None => status.into_response(),
                }
            }
            MovieError::Store(err) => AppError::Store(err).into_response(),
        }
    }
}

/// HTTP status for a domain refusal.
fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// `Duplicate` maps to 409. Everything else is a server fault: 500 with a
/// sanitized message, details go to the log.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Duplicate => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
        StoreError::MissingId | StoreError::Database(_) => {
            tracing::error!(error = %err, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
