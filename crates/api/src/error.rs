use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vidhub_core::error::CoreError;

use crate::response::{ApiResponse, ResponseCode};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard envelope with one
/// [`ResponseCode`] per error kind.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be bound or failed shape validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An operation failed; the message is safe to show the client and the
    /// underlying cause has already been logged.
    #[error("Operation failed: {0}")]
    Failed(String),

    /// An internal error with a human-readable message. Never shown to clients.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Map this error to its envelope kind and client-facing message.
    fn classify(&self) -> (ResponseCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::VideoNotFound(_) => (
                    ResponseCode::VideoNotExistError,
                    ResponseCode::VideoNotExistError.default_message().to_string(),
                ),
                CoreError::NoResources(_) => (
                    ResponseCode::ResourceNotExistError,
                    ResponseCode::ResourceNotExistError
                        .default_message()
                        .to_string(),
                ),
                CoreError::Validation(msg) => (ResponseCode::RequestParamError, msg.clone()),
                CoreError::InvalidLink(_) => (
                    ResponseCode::InvalidLinkError,
                    ResponseCode::InvalidLinkError.default_message().to_string(),
                ),
                CoreError::UnknownPartition(_) => (
                    ResponseCode::PartitionError,
                    ResponseCode::PartitionError.default_message().to_string(),
                ),
                CoreError::Unauthorized(msg) => (ResponseCode::Unauthorized, msg.clone()),
                CoreError::Forbidden(msg) => (ResponseCode::Forbidden, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (ResponseCode::Error, INTERNAL_MESSAGE.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (ResponseCode::RequestParamError, msg.clone()),
            AppError::Failed(msg) => (ResponseCode::Error, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (ResponseCode::Error, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (kind, message) = self.classify();
        let status = kind.http_status();

        if status.is_client_error() {
            tracing::warn!(code = kind.code(), %message, detail = %self, "Request rejected");
        }

        (status, axum::Json(ApiResponse::error(kind, message))).into_response()
    }
}

/// Classify a sqlx error into an envelope kind and message.
///
/// - `RowNotFound` maps to the generic not-found kind.
/// - Everything else maps to the generic error kind with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (ResponseCode, String) {
    match err {
        sqlx::Error::RowNotFound => (
            ResponseCode::NotFound,
            ResponseCode::NotFound.default_message().to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (ResponseCode::Error, INTERNAL_MESSAGE.to_string())
        }
    }
}

/// Fallback for unmatched routes, so 404s carry the envelope too.
pub async fn not_found_fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(ApiResponse::error(
            ResponseCode::NotFound,
            ResponseCode::NotFound.default_message(),
        )),
    )
        .into_response()
}
