// tests/comment_likes.rs
mod support;

use axum::http::StatusCode;
use plaza_core::domain::item::ItemKind;
use serde_json::json;
use support::{TestApp, assert_error_response, body_json, request, request_json};

async fn post_comment(app: &TestApp, uri: &str, author: plaza_core::domain::user::UserId, text: &str) -> i64 {
    let resp = app
        .send(request_json("POST", uri, Some(author), json!({ "content": text })))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn comments_are_listed_oldest_first_for_an_existing_item() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let reader = app.seed_user("reader@example.com", "reader").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Talk").await;
    let uri = format!("/api/v1/articles/{}/comments", item.id);

    post_comment(&app, &uri, reader.id, "first!").await;
    post_comment(&app, &uri, owner.id, "thanks").await;

    let resp = app.send(request("GET", &uri, None, "127.0.0.1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["content"], "first!");
    assert_eq!(rows[0]["author"], "reader@example.com");
    assert_eq!(rows[1]["content"], "thanks");
}

#[tokio::test]
async fn commenting_requires_authentication_and_content() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Product, owner.id, "Lamp").await;
    let uri = format!("/api/v1/products/{}/comments", item.id);

    let resp = app
        .send(request_json("POST", &uri, None, json!({ "content": "hi" })))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .send(request_json("POST", &uri, Some(owner.id), json!({})))
        .await;
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(message.starts_with("content:"), "{message}");

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/products/99/comments",
            Some(owner.id),
            json!({ "content": "hi" }),
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "product not found");
}

#[tokio::test]
async fn like_toggles_on_and_off() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let fan = app.seed_user("fan@example.com", "fan").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Talk").await;
    let comments = format!("/api/v1/articles/{}/comments", item.id);
    let comment_id = post_comment(&app, &comments, owner.id, "hello").await;
    let like = format!("{comments}/{comment_id}/like");

    let resp = app.send(request("POST", &like, Some(fan.id), "127.0.0.1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["message"], "comment liked");
    assert_eq!(json["comment"]["like_count"], 1);
    assert_eq!(json["comment"]["is_liked"], true);
    assert_eq!(json["comment"]["like_users"], json!([fan.id.0]));

    let resp = app.send(request("POST", &like, Some(fan.id), "127.0.0.1")).await;
    let json = body_json(resp).await;
    assert_eq!(json["message"], "comment like removed");
    assert_eq!(json["comment"]["like_count"], 0);
    assert_eq!(json["comment"]["is_liked"], false);
}

#[tokio::test]
async fn is_liked_is_computed_per_viewer() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let fan = app.seed_user("fan@example.com", "fan").await;
    let item = app.seed_item(ItemKind::Product, owner.id, "Lamp").await;
    let comments = format!("/api/v1/products/{}/comments", item.id);
    let comment_id = post_comment(&app, &comments, owner.id, "ask me").await;

    app.send(request(
        "POST",
        &format!("{comments}/{comment_id}/like"),
        Some(fan.id),
        "127.0.0.1",
    ))
    .await;

    let as_fan = body_json(app.send(request("GET", &comments, Some(fan.id), "127.0.0.1")).await).await;
    assert_eq!(as_fan[0]["is_liked"], true);

    let as_owner =
        body_json(app.send(request("GET", &comments, Some(owner.id), "127.0.0.1")).await).await;
    assert_eq!(as_owner[0]["is_liked"], false);
    assert_eq!(as_owner[0]["like_count"], 1);

    let anonymous = body_json(app.send(request("GET", &comments, None, "127.0.0.1")).await).await;
    assert_eq!(anonymous[0]["is_liked"], false);
}

#[tokio::test]
async fn anonymous_like_is_unauthorized() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Talk").await;
    let comments = format!("/api/v1/articles/{}/comments", item.id);
    let comment_id = post_comment(&app, &comments, owner.id, "hello").await;

    let resp = app
        .send(request(
            "POST",
            &format!("{comments}/{comment_id}/like"),
            None,
            "127.0.0.1",
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    assert_eq!(message, "authentication required to like comments");
}

#[tokio::test]
async fn liking_a_missing_item_or_comment_is_not_found() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Talk").await;
    let other = app.seed_item(ItemKind::Article, owner.id, "Elsewhere").await;
    let comment_id = post_comment(
        &app,
        &format!("/api/v1/articles/{}/comments", other.id),
        owner.id,
        "wrong item",
    )
    .await;

    let resp = app
        .send(request(
            "POST",
            "/api/v1/articles/77/comments/1/like",
            Some(owner.id),
            "127.0.0.1",
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "article not found");

    let resp = app
        .send(request(
            "POST",
            &format!("/api/v1/articles/{}/comments/{comment_id}/like", item.id),
            Some(owner.id),
            "127.0.0.1",
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "comment not found");

    let resp = app
        .send(request(
            "POST",
            &format!("/api/v1/articles/{}/comments/abc/like", item.id),
            Some(owner.id),
            "127.0.0.1",
        ))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}
