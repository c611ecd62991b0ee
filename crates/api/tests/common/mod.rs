#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use jsonwebtoken::{encode, EncodingKey, Header};
use vidhub_api::auth::jwt::{Claims, JwtConfig};
use vidhub_api::config::ServerConfig;
use vidhub_api::router::build_app_router;
use vidhub_api::state::AppState;
use vidhub_core::status;
use vidhub_core::types::DbId;
use vidhub_db::models::resource::CreateResource;
use vidhub_db::models::upload_link::CreateUploadLink;
use vidhub_db::models::user::CreateUser;
use vidhub_db::models::video::CreateVideo;
use vidhub_db::repositories::{ResourceRepo, UploadLinkRepo, UserRepo, VideoRepo};

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and a fresh storage directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_timeout_secs: 3600,
        click_window_secs: 1800,
        upload_link_ttl_hours: 48,
        storage_dir: fresh_storage_dir(),
        public_base_url: "/static".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            leeway_secs: 0,
        },
    }
}

fn fresh_storage_dir() -> PathBuf {
    std::env::temp_dir().join(format!("vidhub-test-{}", uuid::Uuid::new_v4()))
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user and return `(id, bearer token)`.
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            avatar: format!("/static/image/{username}.png"),
            sign: format!("{username}'s channel"),
            role: role.to_string(),
        },
    )
    .await
    .expect("user insert should succeed");
    let token = token_for(user.id, role);
    (user.id, token)
}

/// Sign a token the way the account service does.
pub fn token_for(user_id: DbId, role: &str) -> String {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: (Utc::now() + Duration::minutes(15)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token signing should succeed")
}

pub async fn partition_id(pool: &PgPool, content: &str) -> DbId {
    sqlx::query_scalar("SELECT id FROM partitions WHERE content = $1")
        .bind(content)
        .fetch_one(pool)
        .await
        .expect("seeded partition should exist")
}

/// Record `link` in the upload-tracking table as uploaded by `user_id`.
pub async fn record_link(pool: &PgPool, link: &str, user_id: DbId) {
    UploadLinkRepo::record(
        pool,
        &CreateUploadLink {
            link: link.to_string(),
            user_id,
            kind: "image".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .expect("link insert should succeed");
}

/// Insert a draft video directly through the repository.
pub async fn create_draft(pool: &PgPool, user_id: DbId, title: &str) -> DbId {
    let input = CreateVideo {
        user_id,
        title: title.to_string(),
        cover: format!("/static/image/{title}.png"),
        description: String::new(),
        tags: "demo".to_string(),
        copyright: true,
        partition_id: partition_id(pool, "Programming").await,
    };
    VideoRepo::create_with_like(pool, &input)
        .await
        .expect("video insert should succeed")
        .id
}

pub async fn attach_resource(pool: &PgPool, video_id: DbId) {
    ResourceRepo::create(
        pool,
        &CreateResource {
            video_id,
            title: "part 1".to_string(),
            url: format!("/static/video/{video_id}.mp4"),
            duration_secs: Some(12.5),
        },
    )
    .await
    .expect("resource insert should succeed");
}

/// Insert a video with one resource and drive it through approval.
pub async fn create_approved(pool: &PgPool, user_id: DbId, title: &str) -> DbId {
    let id = create_draft(pool, user_id, title).await;
    attach_resource(pool, id).await;
    VideoRepo::update_status(pool, id, status::WAITING_REVIEW)
        .await
        .unwrap();
    assert!(VideoRepo::apply_review(pool, id, status::AUDIT_APPROVED)
        .await
        .unwrap());
    id
}

pub async fn video_status(pool: &PgPool, id: DbId) -> i16 {
    sqlx::query_scalar("SELECT status FROM videos WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_videos(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM videos")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET as if the request came through a proxy for `client_ip`.
pub async fn get_from(app: Router, uri: &str, client_ip: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw_auth(app: Router, uri: &str, token: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// One part of a multipart request.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

const BOUNDARY: &str = "vidhub-test-boundary";

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    parts: &[Part<'_>],
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
