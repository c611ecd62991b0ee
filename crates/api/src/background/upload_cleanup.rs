//! Periodic purge of expired upload links and stale view records.
//!
//! Expired `upload_links` rows already fail ownership checks; click records
//! older than the click window no longer suppress anything. Both are dead
//! weight and are deleted on a fixed interval using `tokio::time::interval`.

use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use vidhub_db::repositories::{UploadLinkRepo, VideoClickRepo};

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the cleanup loop until `cancel` is triggered.
pub async fn run(pool: PgPool, click_window_secs: i64, cancel: CancellationToken) {
    tracing::info!(
        click_window_secs,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Upload cleanup job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Upload cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                purge_once(&pool, click_window_secs).await;
            }
        }
    }
}

/// One cleanup pass. Failures are logged and retried on the next tick.
pub async fn purge_once(pool: &PgPool, click_window_secs: i64) {
    match UploadLinkRepo::delete_expired(pool).await {
        Ok(0) => tracing::debug!("Upload cleanup: no expired links"),
        Ok(deleted) => tracing::info!(deleted, "Upload cleanup: purged expired links"),
        Err(e) => tracing::error!(error = %e, "Upload cleanup: link purge failed"),
    }

    match VideoClickRepo::delete_older_than(pool, click_window_secs).await {
        Ok(0) => tracing::debug!("Upload cleanup: no stale click records"),
        Ok(deleted) => tracing::info!(deleted, "Upload cleanup: purged stale click records"),
        Err(e) => tracing::error!(error = %e, "Upload cleanup: click record purge failed"),
    }
}
