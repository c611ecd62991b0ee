//! Route definitions for file uploads.
//!
//! Mounted at `/api/v1/upload` by the app router, outside the general request
//! timeout. Both routes raise axum's default body limit to the largest
//! accepted file plus multipart overhead.
//!
//! ```text
//! POST /image     upload_image    (auth, multipart `image`)
//! POST /video     upload_video    (auth, multipart `vid`, `video`)
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use vidhub_core::upload::{MAX_IMAGE_BYTES, MAX_VIDEO_BYTES};

use crate::handlers::upload;
use crate::state::AppState;

/// Room for multipart boundaries and the non-file fields.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/image",
            post(upload::upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD)),
        )
        .route(
            "/video",
            post(upload::upload_video)
                .layer(DefaultBodyLimit::max(MAX_VIDEO_BYTES + MULTIPART_OVERHEAD)),
        )
}
