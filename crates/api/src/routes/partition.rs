//! Route definitions for partitions. Mounted at `/partition`.

use axum::routing::get;
use axum::Router;

use crate::handlers::partition;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/list", get(partition::list_partitions))
}
