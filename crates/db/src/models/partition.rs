//! Partition (category) model.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `partitions` table. Top-level partitions have no parent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partition {
    pub id: DbId,
    pub content: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
}
