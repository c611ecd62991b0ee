//! Repository for the `videos` and `video_likes` tables.
//!
//! Covers the video lifecycle (create, edit, submit, review, delete) and the
//! listing queries behind the partition feed, search, and user pages.

use sqlx::PgPool;
use vidhub_core::pagination::Page;
use vidhub_core::status;
use vidhub_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideoInfo, Video, VideoListItem};

/// Column list for `videos` queries.
const COLUMNS: &str = "\
    id, user_id, title, cover, description, tags, copyright, partition_id, \
    status, clicks, created_at, updated_at";

/// Select list for [`VideoListItem`] rows. Expects `videos v` joined to `users u`.
const LIST_SELECT: &str = "\
    SELECT v.id AS vid, v.title, v.cover, v.status, v.clicks, v.created_at, \
           u.id AS uid, u.username AS name, u.avatar \
    FROM videos v \
    JOIN users u ON u.id = v.user_id";

/// Escape `%`, `_` and `\` so user keywords match literally inside `ILIKE`.
fn like_pattern(keywords: &str) -> String {
    let mut escaped = String::with_capacity(keywords.len() + 2);
    escaped.push('%');
    for c in keywords.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Provides persistence for videos and their like counters.
pub struct VideoRepo;

impl VideoRepo {
    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Insert a video together with its like counter row.
    ///
    /// Both inserts run in one transaction: if the like row cannot be
    /// created the video insert is rolled back and no row is left behind.
    pub async fn create_with_like(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO videos \
                (user_id, title, cover, description, tags, copyright, partition_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.cover)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(input.copyright)
            .bind(input.partition_id)
            .bind(status::CREATED_VIDEO)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO video_likes (video_id) VALUES ($1)")
            .bind(video.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(video)
    }

    /// Find a video by its ID, in any status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the author-editable fields. Returns `false` if the video is gone.
    pub async fn update_info(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideoInfo,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE videos \
             SET title = $2, cover = $3, description = $4, tags = $5, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.cover)
        .bind(&input.description)
        .bind(&input.tags)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a video's status unconditionally.
    pub async fn update_status(pool: &PgPool, id: DbId, new_status: i16) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE videos SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(new_status)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a review verdict for a video that is waiting for review.
    ///
    /// The video and all of its resources move to `verdict` in one
    /// transaction. Returns `false` (and changes nothing) if the video does
    /// not exist or is not in `WAITING_REVIEW`.
    pub async fn apply_review(pool: &PgPool, id: DbId, verdict: i16) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE videos SET status = $2, updated_at = NOW() WHERE id = $1 AND status = $3",
        )
        .bind(id)
        .bind(verdict)
        .bind(status::WAITING_REVIEW)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        if !updated {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("UPDATE resources SET status = $2, updated_at = NOW() WHERE video_id = $1")
            .bind(id)
            .bind(verdict)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a video. Likes, resources, and click records cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Approved videos, newest first.
    ///
    /// `partition` of `None` lists everything. A top-level partition matches
    /// all of its sub-partitions.
    pub async fn list_approved(
        pool: &PgPool,
        partition: Option<DbId>,
        page: Page,
    ) -> Result<Vec<VideoListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} \
             JOIN partitions p ON p.id = v.partition_id \
             WHERE v.status = $1 \
               AND ($2::BIGINT IS NULL OR v.partition_id = $2 OR p.parent_id = $2) \
             ORDER BY v.created_at DESC, v.id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, VideoListItem>(&query)
            .bind(status::AUDIT_APPROVED)
            .bind(partition)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Total for [`list_approved`](Self::list_approved) with the same filter.
    pub async fn count_approved(pool: &PgPool, partition: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM videos v \
             JOIN partitions p ON p.id = v.partition_id \
             WHERE v.status = $1 \
               AND ($2::BIGINT IS NULL OR v.partition_id = $2 OR p.parent_id = $2)",
        )
        .bind(status::AUDIT_APPROVED)
        .bind(partition)
        .fetch_one(pool)
        .await
    }

    /// A random sample of approved videos.
    pub async fn recommended(pool: &PgPool, limit: i64) -> Result<Vec<VideoListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} \
             WHERE v.status = $1 \
             ORDER BY random() \
             LIMIT $2"
        );
        sqlx::query_as::<_, VideoListItem>(&query)
            .bind(status::AUDIT_APPROVED)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Approved videos whose title or tags contain `keywords`, case-insensitive.
    pub async fn search(
        pool: &PgPool,
        keywords: &str,
        page: Page,
    ) -> Result<Vec<VideoListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} \
             WHERE v.status = $1 AND (v.title ILIKE $2 OR v.tags ILIKE $2) \
             ORDER BY v.clicks DESC, v.id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, VideoListItem>(&query)
            .bind(status::AUDIT_APPROVED)
            .bind(like_pattern(keywords))
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Videos of one author, newest first. `approved_only` hides drafts and
    /// rejected videos (public profile); the author's own list shows all.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        approved_only: bool,
        page: Page,
    ) -> Result<Vec<VideoListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} \
             WHERE v.user_id = $1 AND ($2 = false OR v.status = $3) \
             ORDER BY v.created_at DESC, v.id DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, VideoListItem>(&query)
            .bind(user_id)
            .bind(approved_only)
            .bind(status::AUDIT_APPROVED)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Total for [`list_by_user`](Self::list_by_user) with the same filter.
    pub async fn count_by_user(
        pool: &PgPool,
        user_id: DbId,
        approved_only: bool,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM videos WHERE user_id = $1 AND ($2 = false OR status = $3)",
        )
        .bind(user_id)
        .bind(approved_only)
        .bind(status::AUDIT_APPROVED)
        .fetch_one(pool)
        .await
    }

    /// Videos in `wanted` status, oldest first (the review queue).
    pub async fn list_by_status(
        pool: &PgPool,
        wanted: i16,
        page: Page,
    ) -> Result<Vec<VideoListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} \
             WHERE v.status = $1 \
             ORDER BY v.updated_at ASC, v.id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, VideoListItem>(&query)
            .bind(wanted)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Number of videos in `wanted` status.
    pub async fn count_by_status(pool: &PgPool, wanted: i16) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM videos WHERE status = $1")
            .bind(wanted)
            .fetch_one(pool)
            .await
    }
}
