//! Multipart upload handlers for cover images and video files.
//!
//! Every stored file is recorded in the upload-tracking table under its
//! public link, so later metadata requests can prove the caller uploaded it.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use uuid::Uuid;
use vidhub_core::status;
use vidhub_core::types::DbId;
use vidhub_core::upload::{public_link, stem_of, validate_upload, UploadKind};
use vidhub_core::video::{ensure_author, video_not_found};
use vidhub_db::models::resource::{CreateResource, Resource};
use vidhub_db::models::upload_link::CreateUploadLink;
use vidhub_db::repositories::{ResourceRepo, UploadLinkRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UrlPayload {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcePayload {
    pub resource: Resource,
}

/// An uploaded file held in memory until it is validated and stored.
struct UploadedFile {
    file_name: String,
    data: Bytes,
}

/// A file written to storage whose link has been recorded.
struct StoredFile {
    link: String,
    path: PathBuf,
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    tracing::warn!(error = %e, "Malformed multipart body");
    AppError::BadRequest("malformed multipart body".into())
}

/// Remove a stored file that no database row will point at.
async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::error!(error = %e, path = %path.display(), "Failed to remove orphaned upload");
    }
}

/// Read a file field; a missing file name becomes an empty string and fails
/// extension validation later.
async fn read_file(field: axum::extract::multipart::Field<'_>) -> AppResult<UploadedFile> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await.map_err(multipart_error)?;
    Ok(UploadedFile { file_name, data })
}

/// Validate, write to `STORAGE_DIR/<kind>/<uuid>.<ext>`, and record the link
/// for `user_id`. The file is removed again if the link cannot be recorded.
async fn store_upload(
    state: &AppState,
    user_id: DbId,
    kind: UploadKind,
    file: &UploadedFile,
) -> AppResult<StoredFile> {
    let ext = validate_upload(kind, &file.file_name, file.data.len())?;

    let dir = state.config.storage_dir.join(kind.as_str());
    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        tracing::error!(error = %e, dir = %dir.display(), "Failed to create storage directory");
        AppError::Failed("failed to store file".into())
    })?;

    let stored_name = format!("{}.{ext}", Uuid::now_v7());
    let path = dir.join(&stored_name);
    tokio::fs::write(&path, &file.data).await.map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "Failed to write upload");
        AppError::Failed("failed to store file".into())
    })?;

    let link = public_link(&state.config.public_base_url, kind, &stored_name);
    let recorded = UploadLinkRepo::record(
        &state.pool,
        &CreateUploadLink {
            link: link.clone(),
            user_id,
            kind: kind.as_str().to_string(),
            expires_at: Utc::now() + Duration::hours(state.config.upload_link_ttl_hours),
        },
    )
    .await;
    if let Err(e) = recorded {
        discard(&path).await;
        return Err(e.into());
    }

    tracing::info!(
        user_id,
        kind = kind.as_str(),
        bytes = file.data.len(),
        %link,
        "Upload stored"
    );
    Ok(StoredFile { link, path })
}

/// POST /api/v1/upload/image
///
/// Multipart field `image`. Returns the link to use as a video cover.
pub async fn upload_image(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UrlPayload>>> {
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("image") {
            image = Some(read_file(field).await?);
        }
    }

    let image =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;
    let stored = store_upload(&state, user.user_id, UploadKind::Image, &image).await?;

    Ok(Json(ApiResponse::ok(UrlPayload { url: stored.link })))
}

/// POST /api/v1/upload/video
///
/// Multipart fields `vid` and `video`. Attaches the file as a new resource
/// of one of the caller's draft or rejected videos.
pub async fn upload_video(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<ResourcePayload>>> {
    let mut vid: Option<DbId> = None;
    let mut video_file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("vid") => {
                let text = field.text().await.map_err(multipart_error)?;
                let parsed = text
                    .trim()
                    .parse::<DbId>()
                    .map_err(|_| AppError::BadRequest("'vid' must be an integer".into()))?;
                vid = Some(parsed);
            }
            Some("video") => video_file = Some(read_file(field).await?),
            _ => {}
        }
    }

    let vid = vid.ok_or_else(|| AppError::BadRequest("Missing required 'vid' field".into()))?;
    let video_file =
        video_file.ok_or_else(|| AppError::BadRequest("Missing required 'video' field".into()))?;

    let video = VideoRepo::find_by_id(&state.pool, vid)
        .await?
        .ok_or_else(|| AppError::Core(video_not_found(vid)))?;
    ensure_author(user.user_id, video.user_id, video.id)?;
    if !status::accepts_resources(video.status) {
        return Err(AppError::BadRequest(format!(
            "video is {} and cannot accept new files",
            status::status_label(video.status)
        )));
    }

    let stored = store_upload(&state, user.user_id, UploadKind::Video, &video_file).await?;
    let created = ResourceRepo::create(
        &state.pool,
        &CreateResource {
            video_id: video.id,
            title: stem_of(&video_file.file_name).to_string(),
            url: stored.link,
            duration_secs: None,
        },
    )
    .await;
    let resource = match created {
        Ok(resource) => resource,
        Err(e) => {
            discard(&stored.path).await;
            return Err(e.into());
        }
    };

    tracing::info!(video_id = video.id, resource_id = resource.id, "Resource attached");
    Ok(Json(ApiResponse::ok(ResourcePayload { resource })))
}
