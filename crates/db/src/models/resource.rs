//! Resource (media file attached to a video) model and DTO.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    #[serde(rename = "vid")]
    pub video_id: DbId,
    pub title: String,
    pub url: String,
    #[serde(rename = "duration")]
    pub duration_secs: Option<f64>,
    pub status: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a resource to a video.
#[derive(Debug, Clone)]
pub struct CreateResource {
    pub video_id: DbId,
    pub title: String,
    pub url: String,
    pub duration_secs: Option<f64>,
}
