//! Request extractors that turn binding failures into envelope errors.
//!
//! axum's stock `Json` / `Query` rejections produce plain-text bodies. These
//! wrappers log the parser's explanation and answer with the fixed
//! `RequestParamError` message inside the standard envelope.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::response::ResponseCode;

/// Log why binding failed and return the client-facing error.
fn reject(stage: &'static str, detail: impl std::fmt::Display) -> AppError {
    tracing::warn!(stage, detail = %detail, "Request parameters rejected");
    AppError::BadRequest(ResponseCode::RequestParamError.default_message().to_string())
}

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// ```ignore
/// async fn handler(ValidJson(input): ValidJson<IdRequest>) -> AppResult<Json<()>> { .. }
/// ```
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| reject("json", rejection.body_text()))?;
        value.validate().map_err(|e| reject("validate", e))?;
        Ok(ValidJson(value))
    }
}

/// Query string deserialized into `T`; malformed values become `RequestParamError`.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| reject("query", rejection.body_text()))?;
        Ok(ValidQuery(value))
    }
}
