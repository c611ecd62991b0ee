//! Repository for view counting (`video_click_records` + `videos.clicks`).

use sqlx::PgPool;
use vidhub_core::types::DbId;

pub struct VideoClickRepo;

impl VideoClickRepo {
    /// Credit one view from `client_ip`, unless that IP was credited for this
    /// video within the last `window_secs`. Returns `true` if the counter moved.
    ///
    /// The conditional upsert and the counter bump share a transaction. A
    /// concurrent request for the same pair blocks on the record row and then
    /// sees the fresh `last_counted_at`, so only one of them is credited.
    pub async fn record_view(
        pool: &PgPool,
        video_id: DbId,
        client_ip: &str,
        window_secs: i64,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let credited = sqlx::query(
            "INSERT INTO video_click_records (video_id, client_ip, last_counted_at)
             VALUES ($1, $2, NOW())
             ON CONFLICT (video_id, client_ip) DO UPDATE
                SET last_counted_at = NOW()
                WHERE video_click_records.last_counted_at
                      <= NOW() - make_interval(secs => $3)",
        )
        .bind(video_id)
        .bind(client_ip)
        .bind(window_secs as f64)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        if credited {
            sqlx::query("UPDATE videos SET clicks = clicks + 1 WHERE id = $1")
                .bind(video_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(credited)
    }

    /// Aggregate click count of a video (0 if the video does not exist).
    pub async fn count(pool: &PgPool, video_id: DbId) -> Result<i64, sqlx::Error> {
        let clicks = sqlx::query_scalar::<_, i64>("SELECT clicks FROM videos WHERE id = $1")
            .bind(video_id)
            .fetch_optional(pool)
            .await?;
        Ok(clicks.unwrap_or(0))
    }

    /// Delete records whose window has elapsed; they no longer suppress anything.
    pub async fn delete_older_than(pool: &PgPool, window_secs: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM video_click_records
             WHERE last_counted_at <= NOW() - make_interval(secs => $1)",
        )
        .bind(window_secs as f64)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
