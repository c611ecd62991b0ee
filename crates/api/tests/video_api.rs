//! HTTP-level integration tests for the `/api/v1/video` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    attach_resource, body_json, count_videos, create_approved, create_draft, create_test_user,
    get, get_auth, get_from, partition_id, post_json, post_json_auth, post_raw_auth, record_link,
    video_status,
};
use serde_json::json;
use sqlx::PgPool;
use vidhub_core::status;

const OWNED_COVER: &str = "/static/image/owned.png";

// ---------------------------------------------------------------------------
// UploadVideoInfo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_then_submit_without_resources(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    record_link(&pool, OWNED_COVER, uid).await;
    let partition = partition_id(&pool, "Programming").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({
            "title": "Test",
            "cover": OWNED_COVER,
            "desc": "first upload",
            "tags": "rust, axum, rust",
            "copyright": true,
            "partition": partition,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], 200);
    assert_eq!(json["message"], "ok");
    let vid = json["data"]["vid"].as_i64().unwrap();

    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM video_likes WHERE video_id = $1")
        .bind(vid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(likes, 1);

    let tags: String = sqlx::query_scalar("SELECT tags FROM videos WHERE id = $1")
        .bind(vid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(tags, "rust,axum");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/video/review/submit", &token, json!({ "id": vid })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4104);
    assert_eq!(json["message"], "resource does not exist");
    assert_eq!(video_status(&pool, vid).await, status::CREATED_VIDEO);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_unowned_cover_creates_nothing(pool: PgPool) {
    let (_alice, token) = create_test_user(&pool, "alice", "user").await;
    let (bob, _) = create_test_user(&pool, "bob", "user").await;
    record_link(&pool, OWNED_COVER, bob).await;
    let partition = partition_id(&pool, "Programming").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({ "title": "Stolen", "cover": OWNED_COVER, "partition": partition }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4101);
    assert_eq!(json["message"], "invalid file link");
    assert!(json["data"].is_null());
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_unknown_cover_is_invalid_link(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;
    let partition = partition_id(&pool, "Programming").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({ "title": "Nope", "cover": "/static/image/never-uploaded.png", "partition": partition }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4101);
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_into_top_level_partition_is_rejected(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    record_link(&pool, OWNED_COVER, uid).await;
    let top_level = partition_id(&pool, "Technology").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({ "title": "Misfiled", "cover": OWNED_COVER, "partition": top_level }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4102);
    assert_eq!(json["message"], "partition does not exist");
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_empty_cover_is_invalid_link(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;
    let partition = partition_id(&pool, "Programming").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({ "title": "Test", "cover": "", "partition": partition }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4101);
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_non_positive_partition_is_partition_error(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    record_link(&pool, OWNED_COVER, uid).await;

    for partition in [0, -3] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/video/info/upload",
            &token,
            json!({ "title": "Test", "cover": OWNED_COVER, "partition": partition }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], 4102);
    }
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_reports_title_before_cover(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/upload",
        &token,
        json!({ "title": " ", "cover": "", "partition": 0 }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
    assert_eq!(json["message"], "title must be 1-50 characters");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_blank_or_long_title_is_param_error(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    record_link(&pool, OWNED_COVER, uid).await;
    let partition = partition_id(&pool, "Programming").await;

    for title in ["   ".to_string(), "x".repeat(51)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/video/info/upload",
            &token,
            json!({ "title": title, "cover": OWNED_COVER, "partition": partition }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], 4001);
        assert_eq!(json["message"], "title must be 1-50 characters");
    }
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_with_malformed_body_is_param_error(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool);
    let response = post_raw_auth(app, "/api/v1/video/info/upload", &token, "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
    assert_eq!(json["message"], "invalid request parameters");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn binding_errors_do_not_leak_parser_details(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/video/delete", &token, json!({ "id": 0 })).await;
    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
    assert_eq!(json["message"], "invalid request parameters");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/video/list?page=abc").await;
    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
    assert_eq!(json["message"], "invalid request parameters");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_requires_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/video/info/upload",
        json!({ "title": "Anon", "cover": OWNED_COVER, "partition": 4 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4010);
}

// ---------------------------------------------------------------------------
// ModifyVideoInfo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn author_can_modify_keeping_cover(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    let vid = create_draft(&pool, uid, "draft").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/modify",
        &token,
        json!({
            "vid": vid,
            "title": "Renamed",
            "cover": "/static/image/draft.png",
            "desc": "new description",
            "tags": "a,b",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let title: String = sqlx::query_scalar("SELECT title FROM videos WHERE id = $1")
        .bind(vid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(title, "Renamed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn author_changing_to_unowned_cover_is_invalid_link(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    let (bob, _) = create_test_user(&pool, "bob", "user").await;
    record_link(&pool, "/static/image/bobs.png", bob).await;
    let vid = create_draft(&pool, uid, "draft").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/modify",
        &token,
        json!({ "vid": vid, "title": "Renamed", "cover": "/static/image/bobs.png" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4101);
    let cover: String = sqlx::query_scalar("SELECT cover FROM videos WHERE id = $1")
        .bind(vid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(cover, "/static/image/draft.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn author_changing_to_owned_cover_succeeds(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    record_link(&pool, OWNED_COVER, uid).await;
    let vid = create_draft(&pool, uid, "draft").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/modify",
        &token,
        json!({ "vid": vid, "title": "Renamed", "cover": OWNED_COVER }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_author_modify_sees_missing_video(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice", "user").await;
    let (bob, bob_token) = create_test_user(&pool, "bob", "user").await;
    record_link(&pool, OWNED_COVER, bob).await;
    let vid = create_draft(&pool, alice, "draft").await;

    // Even with a cover the caller owns, a non-author learns nothing.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/video/info/modify",
        &bob_token,
        json!({ "vid": vid, "title": "Hijack", "cover": OWNED_COVER }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
    assert_eq!(json["message"], "video does not exist");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn modify_missing_video_is_video_not_exist(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/video/info/modify",
        &token,
        json!({ "vid": 999_999, "title": "Ghost", "cover": OWNED_COVER }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
}

// ---------------------------------------------------------------------------
// GetVideoStatus
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_shows_all_resources_to_author(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    let vid = create_draft(&pool, uid, "draft").await;
    attach_resource(&pool, vid).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/video/status?vid={vid}"), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let video = &json["data"]["video"];
    assert_eq!(video["vid"], vid);
    assert_eq!(video["status"], i64::from(status::CREATED_VIDEO));
    assert_eq!(video["resources"].as_array().unwrap().len(), 1);
    assert_eq!(video["resources"][0]["vid"], vid);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_hidden_from_non_author(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_test_user(&pool, "bob", "user").await;
    let vid = create_draft(&pool, alice, "draft").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/video/status?vid={vid}"), &bob_token).await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_without_vid_defaults_to_missing(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/video/status", &token).await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
}

// ---------------------------------------------------------------------------
// GetVideoByID
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn public_detail_of_approved_video(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    let vid = create_approved(&pool, uid, "hello").await;

    let app = common::build_test_app(pool);
    let response = get_from(app, &format!("/api/v1/video/get?vid={vid}"), "203.0.113.7").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let video = &json["data"]["video"];
    assert_eq!(video["vid"], vid);
    assert_eq!(video["author"]["uid"], uid);
    assert_eq!(video["author"]["name"], "alice");
    assert_eq!(video["clicks"], 1);
    assert_eq!(video["resources"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_detail_hides_unapproved_videos(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    let draft = create_draft(&pool, uid, "draft").await;
    let waiting = create_draft(&pool, uid, "waiting").await;
    vidhub_db::repositories::VideoRepo::update_status(&pool, waiting, status::WAITING_REVIEW)
        .await
        .unwrap();

    for vid in [draft, waiting, 999_999] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/video/get?vid={vid}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], 4103);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeat_views_from_one_ip_count_once(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    let vid = create_approved(&pool, uid, "hello").await;
    let uri = format!("/api/v1/video/get?vid={vid}");

    for _ in 0..3 {
        let app = common::build_test_app(pool.clone());
        let response = get_from(app, &uri, "198.51.100.1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_from(app, &uri, "198.51.100.2").await).await;
    assert_eq!(json["data"]["video"]["clicks"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn zero_click_window_counts_every_view(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    let vid = create_approved(&pool, uid, "hello").await;
    let uri = format!("/api/v1/video/get?vid={vid}");

    let mut config = common::test_config();
    config.click_window_secs = 0;
    for _ in 0..2 {
        let app = common::build_test_app_with_config(pool.clone(), config.clone());
        get_from(app, &uri, "198.51.100.1").await;
    }

    let clicks: i64 = sqlx::query_scalar("SELECT clicks FROM videos WHERE id = $1")
        .bind(vid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(clicks, 2);
}

// ---------------------------------------------------------------------------
// SubmitReview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_resource_moves_to_waiting_review(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    let vid = create_draft(&pool, uid, "draft").await;
    attach_resource(&pool, vid).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/video/review/submit", &token, json!({ "id": vid })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());
    assert_eq!(video_status(&pool, vid).await, status::WAITING_REVIEW);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_by_non_author_is_video_not_exist(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_test_user(&pool, "bob", "user").await;
    let vid = create_draft(&pool, alice, "draft").await;
    attach_resource(&pool, vid).await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/video/review/submit", &bob_token, json!({ "id": vid })).await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
    assert_eq!(video_status(&pool, vid).await, status::CREATED_VIDEO);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_with_missing_id_is_param_error(pool: PgPool) {
    let (_uid, token) = create_test_user(&pool, "alice", "user").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/video/review/submit", &token, json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
}

// ---------------------------------------------------------------------------
// DeleteVideo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn author_deletes_video(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    let vid = create_approved(&pool, uid, "doomed").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/video/delete", &token, json!({ "id": vid })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count_videos(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_author_cannot_delete(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_test_user(&pool, "bob", "user").await;
    let vid = create_draft(&pool, alice, "keep").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/video/delete", &bob_token, json!({ "id": vid })).await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4103);
    assert_eq!(count_videos(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_shows_only_approved_videos(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    create_approved(&pool, uid, "public").await;
    create_draft(&pool, uid, "private").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/video/list?page=1&page_size=10").await).await;

    assert_eq!(json["data"]["count"], 1);
    let videos = json["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "public");
    assert_eq!(videos[0]["author"]["name"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_by_parent_partition_includes_children(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    create_approved(&pool, uid, "tech").await;
    let technology = partition_id(&pool, "Technology").await;
    let music = partition_id(&pool, "Music").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/video/list?partition={technology}")).await).await;
    assert_eq!(json["data"]["count"], 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/video/list?partition={music}")).await).await;
    assert_eq!(json["data"]["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_oversized_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/video/list?page_size=500").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_non_numeric_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/video/list?page=abc").await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_matches_title_case_insensitively(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    create_approved(&pool, uid, "Learning Rust").await;
    create_approved(&pool, uid, "Cooking").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/video/search?keywords=rust").await).await;

    let videos = json["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "Learning Rust");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_without_keywords_is_param_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/video/search?keywords=%20").await;

    let json = body_json(response).await;
    assert_eq!(json["code"], 4001);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recommended_returns_approved_only(pool: PgPool) {
    let (uid, _) = create_test_user(&pool, "alice", "user").await;
    create_approved(&pool, uid, "one").await;
    create_approved(&pool, uid, "two").await;
    create_draft(&pool, uid, "hidden").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/video/recommended?page_size=10").await).await;

    let videos = json["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v["title"] != "hidden"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn own_uploads_include_drafts(pool: PgPool) {
    let (uid, token) = create_test_user(&pool, "alice", "user").await;
    create_approved(&pool, uid, "public").await;
    create_draft(&pool, uid, "private").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/video/upload/get", &token).await).await;
    assert_eq!(json["data"]["count"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/video/user/get?uid={uid}")).await).await;
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["videos"][0]["title"], "public");
}

// ---------------------------------------------------------------------------
// Partitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn partition_list_returns_seeded_tree(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/partition/list").await).await;

    let partitions = json["data"]["partitions"].as_array().unwrap();
    assert_eq!(partitions.len(), 9);
    assert!(partitions[0]["parent_id"].is_null());
    assert!(partitions
        .iter()
        .any(|p| p["content"] == "Programming" && p["parent_id"].is_number()));
}
