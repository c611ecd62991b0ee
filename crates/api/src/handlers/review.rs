//! Admin review workflow: approve or reject submitted videos.

use axum::extract::State;
use axum::Json;
use vidhub_core::status;
use vidhub_core::types::DbId;
use vidhub_core::video::video_not_found;
use vidhub_db::models::video::IdRequest;
use vidhub_db::repositories::VideoRepo;

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidQuery};
use crate::handlers::video::VideoPage;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Apply `verdict` to a video waiting for review. Anything else is reported
/// as a missing video.
async fn apply_verdict(
    state: &AppState,
    admin: &RequireAdmin,
    id: DbId,
    verdict: i16,
) -> AppResult<Json<ApiResponse<()>>> {
    if !VideoRepo::apply_review(&state.pool, id, verdict).await? {
        return Err(video_not_found(id).into());
    }

    tracing::info!(
        video_id = id,
        reviewer_id = admin.0.user_id,
        verdict = status::status_label(verdict),
        "Review verdict recorded"
    );
    Ok(Json(ApiResponse::ok_empty()))
}

/// POST /api/v1/review/video/approve
pub async fn approve_video(
    State(state): State<AppState>,
    admin: RequireAdmin,
    ValidJson(input): ValidJson<IdRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    apply_verdict(&state, &admin, input.id, status::AUDIT_APPROVED).await
}

/// POST /api/v1/review/video/reject
pub async fn reject_video(
    State(state): State<AppState>,
    admin: RequireAdmin,
    ValidJson(input): ValidJson<IdRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    apply_verdict(&state, &admin, input.id, status::REVIEW_FAILED).await
}

/// GET /api/v1/review/video/list?page=&page_size=
///
/// The review queue, oldest submission first.
pub async fn list_pending_review(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidQuery(params): ValidQuery<PageParams>,
) -> AppResult<Json<ApiResponse<VideoPage>>> {
    let page = params.page()?;

    let count = VideoRepo::count_by_status(&state.pool, status::WAITING_REVIEW).await?;
    let videos = VideoRepo::list_by_status(&state.pool, status::WAITING_REVIEW, page).await?;

    Ok(Json(ApiResponse::ok(VideoPage { count, videos })))
}
