//! Upload tracking entries: which user uploaded which file link.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `upload_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UploadLink {
    pub link: String,
    pub user_id: DbId,
    pub kind: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

/// DTO for recording a freshly uploaded file.
#[derive(Debug, Clone)]
pub struct CreateUploadLink {
    pub link: String,
    pub user_id: DbId,
    /// `"image"` or `"video"`, see [`vidhub_core::upload::UploadKind::as_str`].
    pub kind: String,
    pub expires_at: Timestamp,
}
