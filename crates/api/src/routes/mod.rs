pub mod health;
pub mod partition;
pub mod review;
pub mod upload;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree, except `/upload` which the app router
/// mounts separately under its own timeout.
///
/// Route hierarchy:
///
/// ```text
/// /video/info/upload                               register metadata (auth)
/// /video/info/modify                               edit metadata (auth)
/// /video/status                                    author's status view (auth)
/// /video/get                                       public detail
/// /video/review/submit                             submit for review (auth)
/// /video/delete                                    delete (auth)
/// /video/list                                      partition feed
/// /video/recommended                               random approved videos
/// /video/search                                    keyword search
/// /video/upload/get                                caller's own videos (auth)
/// /video/user/get                                  a user's public videos
///
/// /partition/list                                  partition tree
///
/// /review/video/approve                            approve (admin only)
/// /review/video/reject                             reject (admin only)
/// /review/video/list                               review queue (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/video", video::router())
        .nest("/partition", partition::router())
        .nest("/review", review::router())
}
