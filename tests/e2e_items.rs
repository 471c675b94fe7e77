// tests/e2e_items.rs
mod support;

use axum::http::StatusCode;
use plaza_core::domain::item::ItemKind;
use serde_json::json;
use support::{TestApp, assert_error_response, body_json, request, request_json};

#[tokio::test]
async fn health_and_docs_are_served() {
    let app = TestApp::new();

    let resp = app.send(request("GET", "/health", None, "127.0.0.1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");

    let resp = app
        .send(request("GET", "/openapi.json", None, "127.0.0.1"))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/api/v1/{collection}"].is_object());
}

#[tokio::test]
async fn create_article_returns_the_detail() {
    let app = TestApp::new();
    let author = app.seed_user("author@example.com", "author").await;

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/articles",
            Some(author.id),
            json!({ "title": "Hello", "content": "World" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["kind"], "article");
    assert_eq!(json["title"], "Hello");
    assert_eq!(json["author"], "author@example.com");
    assert_eq!(json["author_id"], author.id.0);
    assert_eq!(json["view_count"], 0);
    assert!(json["media"].is_null());
}

#[tokio::test]
async fn create_requires_authentication() {
    let app = TestApp::new();

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/articles",
            None,
            json!({ "title": "Hello", "content": "World" }),
        ))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn unknown_bearer_token_is_rejected_even_on_public_reads() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Public").await;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri(format!("/api/v1/articles/{}", item.id))
        .header("authorization", "Bearer not-a-token")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.send(req).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn product_needs_media_and_fields_are_required() {
    let app = TestApp::new();
    let seller = app.seed_user("seller@example.com", "seller").await;

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/products",
            Some(seller.id),
            json!({ "title": "Lamp", "content": "Bright" }),
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(message, "media: this field is required");

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/products",
            Some(seller.id),
            json!({ "content": "Bright", "media": "media/lamp.png" }),
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(message, "title: this field is required");

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/products",
            Some(seller.id),
            json!({ "title": "Lamp", "content": "Bright", "media": "media/lamp.png" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["media"], "media/lamp.png");
}

#[tokio::test]
async fn only_the_author_may_update_or_delete() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let intruder = app.seed_user("intruder@example.com", "intruder").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Original").await;
    let uri = format!("/api/v1/articles/{}", item.id);

    let resp = app
        .send(request_json(
            "PATCH",
            &uri,
            Some(intruder.id),
            json!({ "title": "Hijacked" }),
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
    assert_eq!(message, "only the author can update this article");

    let resp = app
        .send(request("DELETE", &uri, Some(intruder.id), "127.0.0.1"))
        .await;
    let message = assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
    assert_eq!(message, "only the author can delete this article");

    let resp = app
        .send(request_json(
            "PATCH",
            &uri,
            Some(owner.id),
            json!({ "title": "Edited" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["title"], "Edited");
    assert_eq!(json["content"], "body");
}

#[tokio::test]
async fn alias_routes_update_and_delete() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Product, owner.id, "Lamp").await;
    let uri = format!("/api/v1/products/{}", item.id);

    let resp = app
        .send(request_json(
            "PUT",
            &format!("{uri}/update"),
            Some(owner.id),
            json!({ "content": "Now dimmable" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["content"], "Now dimmable");

    let resp = app
        .send(request(
            "DELETE",
            &format!("{uri}/delete"),
            Some(owner.id),
            "127.0.0.1",
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.send(request("GET", &uri, None, "127.0.0.1")).await;
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "product not found");
}

#[tokio::test]
async fn deleting_an_item_removes_its_comments() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let item = app.seed_item(ItemKind::Article, owner.id, "Doomed").await;
    let uri = format!("/api/v1/articles/{}", item.id);

    let resp = app
        .send(request_json(
            "POST",
            &format!("{uri}/comments"),
            Some(owner.id),
            json!({ "content": "bye" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .send(request("DELETE", &uri, Some(owner.id), "127.0.0.1"))
        .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .send(request("GET", &format!("{uri}/comments"), None, "127.0.0.1"))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn non_numeric_ids_are_not_found() {
    let app = TestApp::new();

    for uri in ["/api/v1/articles/abc", "/api/v1/products/0", "/api/v1/articles/abc/comments"] {
        let resp = app.send(request("GET", uri, None, "127.0.0.1")).await;
        assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = TestApp::new();
    let author = app.seed_user("author@example.com", "author").await;

    let resp = app
        .send(request_json(
            "POST",
            "/api/v1/articles",
            Some(author.id),
            json!({ "title": 5, "content": "x" }),
        ))
        .await;
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(message.contains("title"), "unexpected message {message}");

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/articles")
        .header("authorization", format!("Bearer {}", support::token_for(author.id)))
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"title\": \"unterminated"))
        .unwrap();
    let resp = app.send(req).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/articles")
        .header("authorization", format!("Bearer {}", support::token_for(author.id)))
        .body(axum::body::Body::from("{\"title\":\"a\",\"content\":\"b\"}"))
        .unwrap();
    let resp = app.send(req).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn malformed_query_string_is_a_bad_request() {
    let app = TestApp::new();

    let resp = app
        .send(request("GET", "/api/v1/articles?page=1&page=2", None, "127.0.0.1"))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
