// tests/item_listing.rs
mod support;

use axum::http::StatusCode;
use plaza_core::domain::item::{ItemKind, ItemWriteRepository};
use support::{PAGE_SIZE, TestApp, assert_error_response, body_json, request};

fn titles(page: &serde_json::Value) -> Vec<String> {
    page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect()
}

async fn get_page(app: &TestApp, uri: &str) -> serde_json::Value {
    let resp = app.send(request("GET", uri, None, "127.0.0.1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

#[tokio::test]
async fn empty_collection_has_an_empty_first_page() {
    let app = TestApp::new();

    let page = get_page(&app, "/api/v1/products").await;
    assert_eq!(page["count"], 0);
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_pages"], 1);
    assert!(page["next"].is_null());
    assert!(page["previous"].is_null());
    assert!(page["results"].as_array().unwrap().is_empty());

    let page = get_page(&app, "/api/v1/products?page=last").await;
    assert_eq!(page["page"], 1);
}

#[tokio::test]
async fn default_order_is_newest_id_first() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    for title in ["first", "second", "third"] {
        app.seed_item(ItemKind::Article, owner.id, title).await;
    }

    let page = get_page(&app, "/api/v1/articles").await;
    assert_eq!(titles(&page), ["third", "second", "first"]);
    assert_eq!(page["results"][0]["author"], owner.id.0);
}

#[tokio::test]
async fn search_matches_title_or_content_case_insensitively() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    app.seed_item_with(ItemKind::Article, owner.id, "Desk Lamp", "bright")
        .await;
    app.seed_item_with(ItemKind::Article, owner.id, "Chair", "a lamp stand")
        .await;
    app.seed_item_with(ItemKind::Article, owner.id, "Table", "oak").await;

    let page = get_page(&app, "/api/v1/articles?search=LAMP").await;
    assert_eq!(page["count"], 2);
    assert_eq!(titles(&page), ["Chair", "Desk Lamp"]);

    let page = get_page(&app, "/api/v1/articles?search=%20%20").await;
    assert_eq!(page["count"], 3);
}

#[tokio::test]
async fn view_count_ordering_breaks_ties_by_id() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let a = app.seed_item(ItemKind::Product, owner.id, "a").await;
    let b = app.seed_item(ItemKind::Product, owner.id, "b").await;
    let c = app.seed_item(ItemKind::Product, owner.id, "c").await;
    for (id, views) in [(a.id, 2), (b.id, 5), (c.id, 2)] {
        for _ in 0..views {
            app.store
                .increment_view_count(ItemKind::Product, id)
                .await
                .unwrap();
        }
    }

    let page = get_page(&app, "/api/v1/products?ordering=-view_count").await;
    assert_eq!(titles(&page), ["b", "a", "c"]);

    let page = get_page(&app, "/api/v1/products?ordering=view_count").await;
    assert_eq!(titles(&page), ["a", "c", "b"]);

    let page = get_page(&app, "/api/v1/products?ordering=title").await;
    assert_eq!(titles(&page), ["c", "b", "a"]);
}

#[tokio::test]
async fn pages_are_bounded_by_the_filtered_total() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "owner").await;
    let total = PAGE_SIZE as usize + 3;
    for n in 0..total {
        app.seed_item(ItemKind::Article, owner.id, &format!("item {n}"))
            .await;
    }

    let first = get_page(&app, "/api/v1/articles").await;
    assert_eq!(first["count"], total);
    assert_eq!(first["total_pages"], 2);
    assert_eq!(first["next"], 2);
    assert_eq!(first["results"].as_array().unwrap().len(), PAGE_SIZE as usize);

    let last = get_page(&app, "/api/v1/articles?page=last").await;
    assert_eq!(last["page"], 2);
    assert_eq!(last["previous"], 1);
    assert!(last["next"].is_null());
    assert_eq!(last["results"].as_array().unwrap().len(), 3);

    for bad in ["3", "0", "abc", "-1"] {
        let resp = app
            .send(request(
                "GET",
                &format!("/api/v1/articles?page={bad}"),
                None,
                "127.0.0.1",
            ))
            .await;
        let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
        assert_eq!(message, "invalid page");
    }
}
