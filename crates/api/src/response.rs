//! Shared response envelope types for API handlers.
//!
//! Every `/api/v1` response body is `{ "code", "message", "data" }`.
//! Successful responses use [`ApiResponse::ok`] / [`ApiResponse::ok_empty`];
//! error bodies are produced by [`AppError`](crate::error::AppError) from a
//! [`ResponseCode`].

use axum::http::StatusCode;
use serde::Serialize;

/// Named result kinds with a fixed numeric code, default message, and HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Ok,
    /// Generic failure; usually carries a custom message.
    Error,
    RequestParamError,
    Unauthorized,
    Forbidden,
    NotFound,
    InvalidLinkError,
    PartitionError,
    VideoNotExistError,
    ResourceNotExistError,
}

impl ResponseCode {
    /// Numeric code written to the envelope's `code` field.
    pub fn code(self) -> i32 {
        match self {
            ResponseCode::Ok => 200,
            ResponseCode::Error => 4000,
            ResponseCode::RequestParamError => 4001,
            ResponseCode::Unauthorized => 4010,
            ResponseCode::Forbidden => 4030,
            ResponseCode::NotFound => 4040,
            ResponseCode::InvalidLinkError => 4101,
            ResponseCode::PartitionError => 4102,
            ResponseCode::VideoNotExistError => 4103,
            ResponseCode::ResourceNotExistError => 4104,
        }
    }

    /// Message used when the error carries no more specific text.
    pub fn default_message(self) -> &'static str {
        match self {
            ResponseCode::Ok => "ok",
            ResponseCode::Error => "error",
            ResponseCode::RequestParamError => "invalid request parameters",
            ResponseCode::Unauthorized => "login required",
            ResponseCode::Forbidden => "permission denied",
            ResponseCode::NotFound => "not found",
            ResponseCode::InvalidLinkError => "invalid file link",
            ResponseCode::PartitionError => "partition does not exist",
            ResponseCode::VideoNotExistError => "video does not exist",
            ResponseCode::ResourceNotExistError => "resource does not exist",
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            ResponseCode::Ok => StatusCode::OK,
            ResponseCode::Error => StatusCode::INTERNAL_SERVER_ERROR,
            ResponseCode::RequestParamError
            | ResponseCode::InvalidLinkError
            | ResponseCode::PartitionError => StatusCode::BAD_REQUEST,
            ResponseCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ResponseCode::Forbidden => StatusCode::FORBIDDEN,
            ResponseCode::NotFound
            | ResponseCode::VideoNotExistError
            | ResponseCode::ResourceNotExistError => StatusCode::NOT_FOUND,
        }
    }
}

/// Standard `{ "code", "message", "data" }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(VidPayload { vid })))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: ResponseCode::Ok.code(),
            message: ResponseCode::Ok.default_message().to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with `data: null`.
    pub fn ok_empty() -> Self {
        Self {
            code: ResponseCode::Ok.code(),
            message: ResponseCode::Ok.default_message().to_string(),
            data: None,
        }
    }

    /// Error envelope for `kind`, with `data: null`.
    pub fn error(kind: ResponseCode, message: impl Into<String>) -> Self {
        Self {
            code: kind.code(),
            message: message.into(),
            data: None,
        }
    }
}
