//! Video entity model, request payloads, DTOs, and response views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vidhub_core::types::{DbId, Timestamp};

use super::resource::Resource;
use super::user::UserInfo;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub cover: String,
    pub description: String,
    pub tags: String,
    pub copyright: bool,
    pub partition_id: DbId,
    pub status: i16,
    pub clicks: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Author columns joined onto list rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuthorSummary {
    pub uid: DbId,
    pub name: String,
    pub avatar: String,
}

/// One entry of a video listing (partition feed, search, user page).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoListItem {
    pub vid: DbId,
    pub title: String,
    pub cover: String,
    pub status: i16,
    pub clicks: i64,
    pub created_at: Timestamp,
    #[sqlx(flatten)]
    pub author: AuthorSummary,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a video. Status always starts at `CREATED_VIDEO`.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub user_id: DbId,
    pub title: String,
    pub cover: String,
    pub description: String,
    pub tags: String,
    pub copyright: bool,
    pub partition_id: DbId,
}

/// DTO for the author-editable metadata fields.
#[derive(Debug, Clone)]
pub struct UpdateVideoInfo {
    pub title: String,
    pub cover: String,
    pub description: String,
    pub tags: String,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `POST /video/info/upload`.
///
/// Only the shape is checked at bind time. Title, cover ownership and
/// partition are checked by the handler in that order so each failure
/// reports its own error kind.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadVideoRequest {
    pub title: String,
    pub cover: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub copyright: bool,
    pub partition: DbId,
}

impl UploadVideoRequest {
    /// Convert into an insert DTO for `user_id`, using already-normalized tags.
    pub fn into_create(self, user_id: DbId, tags: String) -> CreateVideo {
        CreateVideo {
            user_id,
            title: self.title.trim().to_string(),
            cover: self.cover,
            description: self.desc,
            tags,
            copyright: self.copyright,
            partition_id: self.partition,
        }
    }
}

/// Body of `POST /video/info/modify`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModifyVideoRequest {
    #[validate(range(min = 1))]
    pub vid: DbId,
    pub title: String,
    pub cover: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: String,
}

/// Body carrying a single video id (`{ "id": 1 }`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdRequest {
    #[validate(range(min = 1))]
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Views (response payloads, not database rows)
// ---------------------------------------------------------------------------

/// What the author sees while a video is being prepared or reviewed.
#[derive(Debug, Clone, Serialize)]
pub struct VideoStatusView {
    pub vid: DbId,
    pub title: String,
    pub cover: String,
    pub desc: String,
    pub tags: String,
    pub copyright: bool,
    pub partition: DbId,
    pub status: i16,
    pub resources: Vec<Resource>,
}

impl VideoStatusView {
    pub fn new(video: Video, resources: Vec<Resource>) -> Self {
        Self {
            vid: video.id,
            title: video.title,
            cover: video.cover,
            desc: video.description,
            tags: video.tags,
            copyright: video.copyright,
            partition: video.partition_id,
            status: video.status,
            resources,
        }
    }
}

/// Public detail page payload.
#[derive(Debug, Clone, Serialize)]
pub struct VideoDetailView {
    pub vid: DbId,
    pub title: String,
    pub cover: String,
    pub desc: String,
    pub tags: String,
    pub copyright: bool,
    pub partition: DbId,
    pub author: UserInfo,
    pub clicks: i64,
    pub resources: Vec<Resource>,
    pub created_at: Timestamp,
}

impl VideoDetailView {
    pub fn new(video: Video, author: UserInfo, clicks: i64, resources: Vec<Resource>) -> Self {
        Self {
            vid: video.id,
            title: video.title,
            cover: video.cover,
            desc: video.description,
            tags: video.tags,
            copyright: video.copyright,
            partition: video.partition_id,
            author,
            clicks,
            resources,
            created_at: video.created_at,
        }
    }
}
