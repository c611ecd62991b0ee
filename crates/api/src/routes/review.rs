//! Route definitions for the admin review queue.
//!
//! Mounted at `/review`. Every route requires the `admin` role.
//!
//! ```text
//! POST /video/approve     approve_video
//! POST /video/reject      reject_video
//! GET  /video/list        list_pending_review
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/video/approve", post(review::approve_video))
        .route("/video/reject", post(review::reject_video))
        .route("/video/list", get(review::list_pending_review))
}
