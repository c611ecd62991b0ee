//! Handlers for the `/video` resource: metadata registration and edits,
//! status polling, public detail, review submission, deletion, and listings.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vidhub_core::error::CoreError;
use vidhub_core::status;
use vidhub_core::types::DbId;
use vidhub_core::video::{
    authorize_modification, ensure_author, ensure_link_owner, normalize_keywords, normalize_tags,
    validate_description, validate_title, video_not_found,
};
use vidhub_db::models::video::{
    IdRequest, ModifyVideoRequest, UpdateVideoInfo, UploadVideoRequest, Video, VideoDetailView,
    VideoListItem, VideoStatusView,
};
use vidhub_db::repositories::{
    PartitionRepo, ResourceRepo, UploadLinkRepo, UserRepo, VideoClickRepo, VideoRepo,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::middleware::auth::AuthUser;
use crate::middleware::client_ip::ClientIp;
use crate::query::{ListParams, PageParams, RecommendParams, SearchParams, UserVideosParams, VidQuery};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct VidPayload {
    pub vid: DbId,
}

/// `{ "video": ... }` wrapper used by the status and detail endpoints.
#[derive(Debug, Serialize)]
pub struct VideoPayload<T: Serialize> {
    pub video: T,
}

/// A page of list items plus the total number of matches.
#[derive(Debug, Serialize)]
pub struct VideoPage {
    pub count: i64,
    pub videos: Vec<VideoListItem>,
}

/// A list without a total (recommendations, search).
#[derive(Debug, Serialize)]
pub struct VideosPayload {
    pub videos: Vec<VideoListItem>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a video or fail with "video does not exist".
async fn load_video(state: &AppState, vid: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, vid)
        .await?
        .ok_or_else(|| AppError::Core(video_not_found(vid)))
}

/// Load a video the caller authored. Other users' videos look missing.
async fn load_own_video(state: &AppState, caller: DbId, vid: DbId) -> AppResult<Video> {
    let video = load_video(state, vid).await?;
    ensure_author(caller, video.user_id, vid)?;
    Ok(video)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/video/info/upload
///
/// Register metadata for a new video. The cover must be a link the caller
/// uploaded, and the partition must be a sub-partition. The video and its
/// like counter are created together or not at all.
pub async fn upload_video_info(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<UploadVideoRequest>,
) -> AppResult<Json<ApiResponse<VidPayload>>> {
    validate_title(&input.title)?;
    validate_description(&input.desc)?;
    let tags = normalize_tags(&input.tags)?;

    let cover_owner = UploadLinkRepo::owner_of(&state.pool, &input.cover).await?;
    ensure_link_owner(user.user_id, &input.cover, cover_owner)?;

    if !PartitionRepo::is_subpartition(&state.pool, input.partition).await? {
        return Err(CoreError::UnknownPartition(input.partition).into());
    }

    let create = input.into_create(user.user_id, tags);
    let video = VideoRepo::create_with_like(&state.pool, &create)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = user.user_id, "Failed to create video");
            AppError::Failed("failed to create video".into())
        })?;

    tracing::info!(video_id = video.id, user_id = user.user_id, "Video created");
    Ok(Json(ApiResponse::ok(VidPayload { vid: video.id })))
}

/// POST /api/v1/video/info/modify
///
/// Edit title, cover, description and tags. Non-authors get "video does not
/// exist"; an author switching to a cover they did not upload gets an
/// invalid-link error.
pub async fn modify_video_info(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<ModifyVideoRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    validate_title(&input.title)?;
    validate_description(&input.desc)?;
    let tags = normalize_tags(&input.tags)?;

    let video = load_video(&state, input.vid).await?;

    let cover_owner = if input.cover != video.cover {
        UploadLinkRepo::owner_of(&state.pool, &input.cover).await?
    } else {
        None
    };
    authorize_modification(
        user.user_id,
        video.id,
        video.user_id,
        &video.cover,
        &input.cover,
        cover_owner,
    )?;

    let update = UpdateVideoInfo {
        title: input.title.trim().to_string(),
        cover: input.cover,
        description: input.desc,
        tags,
    };
    if !VideoRepo::update_info(&state.pool, video.id, &update).await? {
        return Err(video_not_found(video.id).into());
    }

    tracing::info!(video_id = video.id, user_id = user.user_id, "Video info modified");
    Ok(Json(ApiResponse::ok_empty()))
}

/// GET /api/v1/video/status?vid=
///
/// The author's view of a video in any status, with every attached resource.
pub async fn get_video_status(
    State(state): State<AppState>,
    user: AuthUser,
    ValidQuery(query): ValidQuery<VidQuery>,
) -> AppResult<Json<ApiResponse<VideoPayload<VideoStatusView>>>> {
    let video = load_own_video(&state, user.user_id, query.vid).await?;
    let resources = ResourceRepo::list_by_video(&state.pool, video.id, false).await?;

    Ok(Json(ApiResponse::ok(VideoPayload {
        video: VideoStatusView::new(video, resources),
    })))
}

/// GET /api/v1/video/get?vid=
///
/// Public detail of an approved video. Each call credits at most one view
/// per client address per click window.
pub async fn get_video_by_id(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    ValidQuery(query): ValidQuery<VidQuery>,
) -> AppResult<Json<ApiResponse<VideoPayload<VideoDetailView>>>> {
    let video = load_video(&state, query.vid).await?;
    if video.status != status::AUDIT_APPROVED {
        return Err(video_not_found(video.id).into());
    }

    let author = UserRepo::find_info(&state.pool, video.user_id)
        .await?
        .ok_or_else(|| AppError::Core(video_not_found(video.id)))?;
    let resources = ResourceRepo::list_by_video(&state.pool, video.id, true).await?;

    // A failed view count must not hide the video.
    if let Err(e) = VideoClickRepo::record_view(
        &state.pool,
        video.id,
        &client_ip,
        state.config.click_window_secs,
    )
    .await
    {
        tracing::warn!(error = %e, video_id = video.id, "Failed to record view");
    }
    let clicks = VideoClickRepo::count(&state.pool, video.id).await?;

    Ok(Json(ApiResponse::ok(VideoPayload {
        video: VideoDetailView::new(video, author, clicks, resources),
    })))
}

/// POST /api/v1/video/review/submit
///
/// Queue a draft (or rejected) video for review. At least one resource must
/// be attached.
pub async fn submit_review(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<IdRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let video = load_own_video(&state, user.user_id, input.id).await?;

    if ResourceRepo::count_by_video(&state.pool, video.id).await? == 0 {
        return Err(CoreError::NoResources(video.id).into());
    }

    match video.status {
        status::WAITING_REVIEW => return Ok(Json(ApiResponse::ok_empty())),
        status::AUDIT_APPROVED => {
            return Err(AppError::BadRequest("video is already published".into()));
        }
        _ => {}
    }

    VideoRepo::update_status(&state.pool, video.id, status::WAITING_REVIEW).await?;

    tracing::info!(video_id = video.id, user_id = user.user_id, "Video submitted for review");
    Ok(Json(ApiResponse::ok_empty()))
}

/// POST /api/v1/video/delete
///
/// Delete one of the caller's videos along with its likes, resources and
/// view records.
pub async fn delete_video(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<IdRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let video = load_own_video(&state, user.user_id, input.id).await?;

    if !VideoRepo::delete(&state.pool, video.id).await? {
        return Err(video_not_found(video.id).into());
    }

    tracing::info!(video_id = video.id, user_id = user.user_id, "Video deleted");
    Ok(Json(ApiResponse::ok_empty()))
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/v1/video/list?page=&page_size=&partition=
pub async fn get_video_list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> AppResult<Json<ApiResponse<VideoPage>>> {
    let page = params.page()?;
    let partition = params.partition_filter();

    let count = VideoRepo::count_approved(&state.pool, partition).await?;
    let videos = VideoRepo::list_approved(&state.pool, partition, page).await?;

    Ok(Json(ApiResponse::ok(VideoPage { count, videos })))
}

/// GET /api/v1/video/recommended?page_size=
pub async fn get_recommended(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<RecommendParams>,
) -> AppResult<Json<ApiResponse<VideosPayload>>> {
    let limit = params.limit()?;
    let videos = VideoRepo::recommended(&state.pool, limit).await?;
    Ok(Json(ApiResponse::ok(VideosPayload { videos })))
}

/// GET /api/v1/video/search?page=&page_size=&keywords=
pub async fn search_video(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> AppResult<Json<ApiResponse<VideosPayload>>> {
    let page = params.page()?;
    let keywords = normalize_keywords(&params.keywords)?;

    let videos = VideoRepo::search(&state.pool, &keywords, page).await?;
    Ok(Json(ApiResponse::ok(VideosPayload { videos })))
}

/// GET /api/v1/video/upload/get?page=&page_size=
///
/// The caller's own videos in every status.
pub async fn get_upload_video(
    State(state): State<AppState>,
    user: AuthUser,
    ValidQuery(params): ValidQuery<PageParams>,
) -> AppResult<Json<ApiResponse<VideoPage>>> {
    let page = params.page()?;

    let count = VideoRepo::count_by_user(&state.pool, user.user_id, false).await?;
    let videos = VideoRepo::list_by_user(&state.pool, user.user_id, false, page).await?;

    Ok(Json(ApiResponse::ok(VideoPage { count, videos })))
}

/// GET /api/v1/video/user/get?uid=&page=&page_size=
///
/// Another user's public videos.
pub async fn get_video_list_by_uid(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<UserVideosParams>,
) -> AppResult<Json<ApiResponse<VideoPage>>> {
    let page = params.page()?;

    let count = VideoRepo::count_by_user(&state.pool, params.uid, true).await?;
    let videos = VideoRepo::list_by_user(&state.pool, params.uid, true, page).await?;

    Ok(Json(ApiResponse::ok(VideoPage { count, videos })))
}
