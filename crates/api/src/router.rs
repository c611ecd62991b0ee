//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::not_found_fallback;
use crate::routes;
use crate::state::AppState;

/// Path uploaded files are served under when `PUBLIC_BASE_URL` is a full URL
/// (e.g. a CDN in front of this server).
const DEFAULT_STATIC_PATH: &str = "/static";

/// Build the full application [`Router`] with all middleware layers.
///
/// Upload routes get `upload_timeout_secs`; everything else gets
/// `request_timeout_secs`. The shared middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    let standard = Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        // API v1 routes.
        .nest("/api/v1", routes::api_routes())
        // Uploaded files, read-only.
        .nest_service(
            &static_mount_path(&config.public_base_url),
            ServeDir::new(&config.storage_dir),
        )
        .layer(timeout(config.request_timeout_secs));

    let uploads = Router::new()
        .nest("/api/v1/upload", routes::upload::router())
        .layer(timeout(config.upload_timeout_secs));

    Router::new()
        .merge(standard)
        .merge(uploads)
        .fallback(not_found_fallback)
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid,
        ))
        .layer(cors)
        .with_state(state)
}

fn timeout(secs: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(secs))
}

/// Route path for serving stored files, derived from the public link prefix.
///
/// `/static` and `/static/` both mount at `/static`; an absolute URL falls
/// back to [`DEFAULT_STATIC_PATH`].
fn static_mount_path(public_base_url: &str) -> String {
    let trimmed = public_base_url.trim_end_matches('/');
    if trimmed.starts_with('/') && trimmed.len() > 1 {
        trimmed.to_string()
    } else {
        DEFAULT_STATIC_PATH.to_string()
    }
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid, which is the
/// desired behaviour -- we want misconfiguration to fail fast.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
