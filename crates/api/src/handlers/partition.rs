//! Partition (category) lookup for upload forms and feed filters.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vidhub_db::models::partition::Partition;
use vidhub_db::repositories::PartitionRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PartitionsPayload {
    pub partitions: Vec<Partition>,
}

/// GET /api/v1/partition/list
///
/// Every partition, top-level first. Only entries with a `parent_id` may be
/// used when registering a video.
pub async fn list_partitions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PartitionsPayload>>> {
    let partitions = PartitionRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(PartitionsPayload { partitions })))
}
