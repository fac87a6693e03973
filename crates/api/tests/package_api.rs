//! HTTP-level tests for `/api/packages`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, delete, expect_json, get, post_form, put_form, MultipartBody, TestApp};
use serde_json::json;

async fn create_package(app: &TestApp, token: &str, title: &str) -> serde_json::Value {
    let form = MultipartBody::new()
        .text("title", title)
        .text("price", "IDR 1.500.000")
        .text("description", "Two boat dives")
        .text("inclusions", "2x Dives\nFull Equipment");
    expect_json(
        post_form(app.app(), "/api/packages", &form, Some(token)).await,
        StatusCode::CREATED,
    )
    .await
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let created = create_package(&app, &token, "Fun Dive").await;
    assert_eq!(created["title"], "Fun Dive");
    assert_eq!(created["inclusions"], json!(["2x Dives", "Full Equipment"]));
    assert_eq!(created["imageUrl"], serde_json::Value::Null);

    let id = created["id"].as_str().unwrap();
    let fetched = expect_json(
        get(app.app(), &format!("/api/packages/{id}"), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn blank_lines_are_dropped_from_inclusions() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = MultipartBody::new()
        .text("title", "Guided Dive")
        .text("price", "100")
        .text("inclusions", "2x Dives\n\nGuide\n");
    let json = expect_json(
        post_form(app.app(), "/api/packages", &form, Some(&token)).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["inclusions"], json!(["2x Dives", "Guide"]));
}

#[tokio::test]
async fn create_requires_title_and_price() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = MultipartBody::new().text("title", "No Price");
    let json = expect_json(
        post_form(app.app(), "/api/packages", &form, Some(&token)).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["message"], "Title and price are required.");
    assert_eq!(json["missing"], json!(["price"]));
}

#[tokio::test]
async fn create_requires_auth() {
    let app = TestApp::new().await;
    let form = MultipartBody::new().text("title", "X").text("price", "1");

    let response = post_form(app.app(), "/api/packages", &form, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn image_is_stored_and_served() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = MultipartBody::new()
        .text("title", "Photo Dive")
        .text("price", "200")
        .png("featuredImage");
    let json = expect_json(
        post_form(app.app(), "/api/packages", &form, Some(&token)).await,
        StatusCode::CREATED,
    )
    .await;

    let url = json["imageUrl"].as_str().unwrap();
    assert!(url.starts_with("/uploads/package-"));
    assert!(url.ends_with(".png"));

    for prefix in ["", "/api"] {
        let response = get(app.app(), &format!("{prefix}{url}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"\x89PNG\r\n\x1a\nfake-image");
    }
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let created = create_package(&app, &token, "Fun Dive").await;
    let id = created["id"].as_str().unwrap();

    let form = MultipartBody::new().text("price", "999").text("title", "");
    let json = expect_json(
        put_form(app.app(), &format!("/api/packages/{id}"), &form, Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["price"], "999");
    assert_eq!(json["title"], "Fun Dive");
    assert_eq!(json["inclusions"], created["inclusions"]);
}

#[tokio::test]
async fn update_unknown_package_is_not_found_and_stores_nothing() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = MultipartBody::new().png("featuredImage");
    let json = expect_json(
        put_form(app.app(), "/api/packages/missing-id", &form, Some(&token)).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["message"], "Package with ID missing-id not found.");
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let created = create_package(&app, &token, "Short Lived").await;
    let uri = format!("/api/packages/{}", created["id"].as_str().unwrap());

    let response = delete(app.app(), &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    assert_eq!(get(app.app(), &uri, None).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        delete(app.app(), &uri, Some(&token)).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn list_pages_through_results() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    for i in 1..=12 {
        create_package(&app, &token, &format!("Package {i:02}")).await;
    }

    let json = expect_json(
        get(app.app(), "/api/packages?page=2&limit=5", None).await,
        StatusCode::OK,
    )
    .await;
    let titles: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    // Newest first, so the second page holds the 6th..10th newest.
    assert_eq!(
        titles,
        vec!["Package 07", "Package 06", "Package 05", "Package 04", "Package 03"]
    );
    assert_eq!(
        json["pagination"],
        json!({ "total": 12, "page": 2, "limit": 5, "totalPages": 3 })
    );
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    create_package(&app, &token, "Only Package").await;

    let json = expect_json(
        get(app.app(), "/api/packages?page=9223372036854775807&limit=100", None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"], json!([]));
    assert_eq!(
        json["pagination"],
        json!({ "total": 1, "page": i64::MAX, "limit": 100, "totalPages": 1 })
    );
}

#[tokio::test]
async fn list_filters_by_search_term() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    create_package(&app, &token, "Night Dive").await;
    create_package(&app, &token, "Reef Snorkel").await;

    let json = expect_json(
        get(app.app(), "/api/packages?search=Night", None).await,
        StatusCode::OK,
    )
    .await;
    let titles: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Night Dive"]);
    assert_eq!(json["pagination"]["total"], 1);
}

#[tokio::test]
async fn invalid_page_parameter_is_bad_request() {
    let app = TestApp::new().await;

    let json = expect_json(
        get(app.app(), "/api/packages?page=abc", None).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
