//! Repository for the `resources` table.

use sqlx::PgPool;
use vidhub_core::status;
use vidhub_core::types::DbId;

use crate::models::resource::{CreateResource, Resource};

const COLUMNS: &str = "id, video_id, title, url, duration_secs, status, created_at, updated_at";

pub struct ResourceRepo;

impl ResourceRepo {
    /// Attach a new resource to a video. Starts in `CREATED_VIDEO` status.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (video_id, title, url, duration_secs, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.video_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.duration_secs)
            .bind(status::CREATED_VIDEO)
            .fetch_one(pool)
            .await
    }

    /// List the resources of a video in upload order.
    ///
    /// With `public_only` set, only approved resources are returned.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: DbId,
        public_only: bool,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources
             WHERE video_id = $1 AND ($2 = false OR status = $3)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(video_id)
            .bind(public_only)
            .bind(status::AUDIT_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// Number of resources attached to a video, regardless of status.
    pub async fn count_by_video(pool: &PgPool, video_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resources WHERE video_id = $1")
            .bind(video_id)
            .fetch_one(pool)
            .await
    }
}
