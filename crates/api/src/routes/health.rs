//! `GET /health`, mounted at the root outside `/api/v1` and the envelope.
//!
//! Reports the two things every upload depends on: the database and a
//! writable storage directory.

use std::path::Path;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Name of the scratch file written to probe the storage directory.
const PROBE_FILE: &str = ".health-probe";

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub storage_writable: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = vidhub_db::health_check(&state.pool).await.is_ok();
    let storage_writable = storage_writable(&state.config.storage_dir).await;

    Json(HealthReport {
        status: if db_healthy && storage_writable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        storage_writable,
    })
}

/// Create the directory if needed, then write and remove a probe file.
async fn storage_writable(dir: &Path) -> bool {
    let probe = dir.join(PROBE_FILE);
    let result = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&probe, b"ok").await?;
        tokio::fs::remove_file(&probe).await
    }
    .await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, dir = %dir.display(), "Storage directory is not writable");
    }
    result.is_ok()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
