//! Repository for the `upload_links` table (the upload-tracking cache).
//!
//! A link resolves to its uploader only until `expires_at`; expired rows
//! behave as if they were never recorded and are purged by the cleanup job.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::upload_link::{CreateUploadLink, UploadLink};

const COLUMNS: &str = "link, user_id, kind, created_at, expires_at";

pub struct UploadLinkRepo;

impl UploadLinkRepo {
    /// Record (or re-record) the uploader of a link.
    pub async fn record(
        pool: &PgPool,
        input: &CreateUploadLink,
    ) -> Result<UploadLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO upload_links (link, user_id, kind, expires_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (link) DO UPDATE
                SET user_id = EXCLUDED.user_id,
                    kind = EXCLUDED.kind,
                    expires_at = EXCLUDED.expires_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UploadLink>(&query)
            .bind(&input.link)
            .bind(input.user_id)
            .bind(&input.kind)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// The user who uploaded `link`, if the entry exists and has not expired.
    pub async fn owner_of(pool: &PgPool, link: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT user_id FROM upload_links WHERE link = $1 AND expires_at > NOW()",
        )
        .bind(link)
        .fetch_optional(pool)
        .await
    }

    /// Delete expired entries. Returns the number of rows deleted.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM upload_links WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
