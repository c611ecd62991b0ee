//! Route definitions for the video resource.
//!
//! Mounted at `/video`.
//!
//! ```text
//! POST /info/upload        upload_video_info       (auth)
//! POST /info/modify        modify_video_info       (auth)
//! GET  /status?vid=        get_video_status        (auth, author only)
//! GET  /get?vid=           get_video_by_id
//! POST /review/submit      submit_review           (auth, author only)
//! POST /delete             delete_video            (auth, author only)
//! GET  /list               get_video_list
//! GET  /recommended        get_recommended
//! GET  /search             search_video
//! GET  /upload/get         get_upload_video        (auth)
//! GET  /user/get?uid=      get_video_list_by_uid
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info/upload", post(video::upload_video_info))
        .route("/info/modify", post(video::modify_video_info))
        .route("/status", get(video::get_video_status))
        .route("/get", get(video::get_video_by_id))
        .route("/review/submit", post(video::submit_review))
        .route("/delete", post(video::delete_video))
        .route("/list", get(video::get_video_list))
        .route("/recommended", get(video::get_recommended))
        .route("/search", get(video::search_video))
        .route("/upload/get", get(video::get_upload_video))
        .route("/user/get", get(video::get_video_list_by_uid))
}
