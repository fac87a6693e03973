//! HTTP-level tests for `/api/dashboard`.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, patch_json, post_form, post_json, put_json, MultipartBody, TestApp};
use serde_json::json;

#[tokio::test]
async fn empty_site_has_zero_counts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let json = expect_json(get(app.app(), "/api/dashboard", Some(&token)).await, StatusCode::OK).await;
    assert_eq!(json["packageCount"], 0);
    assert_eq!(json["submissionCount"], 0);
    assert_eq!(json["heroHeadlines"], json!([]));
    assert_eq!(json["experienceMedia"], json!({ "videoUrl": "", "imageUrl": "" }));
    assert_eq!(json["recentArticles"], json!([]));
}

#[tokio::test]
async fn dashboard_aggregates_counts_and_recent_items() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let package = MultipartBody::new().text("title", "Fun Dive").text("price", "100");
    post_form(app.app(), "/api/packages", &package, Some(&token)).await;

    for title in ["Mantas", "Mola Mola"] {
        let article = MultipartBody::new()
            .text("title", title)
            .text("status", "Published")
            .text("content", "body");
        post_form(app.app(), "/api/articles", &article, Some(&token)).await;
    }

    let mut first_submission = None;
    for i in 0..6 {
        let json = expect_json(
            post_json(
                app.app(),
                "/api/submissions",
                json!({ "name": format!("Diver {i}"), "email": "d@example.com", "message": "Hi" }),
                None,
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
        first_submission.get_or_insert(json["data"]["id"].as_str().unwrap().to_string());
    }
    let read_id = first_submission.unwrap();
    patch_json(
        app.app(),
        &format!("/api/submissions/{read_id}/read"),
        json!({ "isRead": true }),
        Some(&token),
    )
    .await;

    put_json(
        app.app(),
        "/api/settings/hero",
        json!([{ "id": "s1", "headline": "Dive Menjangan" }]),
        Some(&token),
    )
    .await;

    let json = expect_json(get(app.app(), "/api/dashboard", Some(&token)).await, StatusCode::OK).await;
    assert_eq!(json["packageCount"], 1);
    assert_eq!(json["articleCount"], 2);
    assert_eq!(json["galleryImageCount"], 0);
    assert_eq!(json["testimonialCount"], 0);
    assert_eq!(json["submissionCount"], 6);
    assert_eq!(json["unreadSubmissionCount"], 5);
    assert_eq!(json["heroHeadlines"][0]["headline"], "Dive Menjangan");

    assert_eq!(json["recentArticles"].as_array().unwrap().len(), 2);
    let article = &json["recentArticles"][0];
    assert!(article["id"].is_string());
    assert!(article["title"].is_string());
    assert!(article["date"].is_string());
    assert!(article.get("content").is_none());

    let recent = json["recentSubmissions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert!(recent[0]["isRead"].is_boolean());
}

#[tokio::test]
async fn dashboard_requires_auth() {
    let app = TestApp::new().await;

    let response = get(app.app(), "/api/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
