//! Tests for `AppError` → HTTP response mapping.
//!
//! Most tests call `IntoResponse` directly on `AppError` values; the last two
//! run a 500 through the development error-detail middleware.

mod common;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use divesite_api::config::AppEnv;
use divesite_api::error::{AppError, AppResult};
use divesite_api::middleware::error_detail::attach_error_detail;
use divesite_api::state::AppState;
use divesite_core::error::CoreError;
use divesite_core::upload::UploadError;
use divesite_db::repositories::GalleryCategoryRepo;
use http_body_util::BodyExt;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Package",
        id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Package with ID abc not found.");
}

#[tokio::test]
async fn missing_fields_lists_field_names() {
    let err = AppError::Core(CoreError::MissingFields {
        message: "Title and price are required.".into(),
        fields: vec!["title", "price"],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["missing"], json!(["title", "price"]));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "invalid field value");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Conflict("duplicate".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_401_and_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("Invalid token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("Not allowed by CORS".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn upload_errors_map_to_400_and_413() {
    let (status, json) =
        error_to_response(AppError::Upload(UploadError::InvalidType("text/plain".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["allowedTypes"].is_array());

    let (status, json) = error_to_response(AppError::Upload(UploadError::TooLarge {
        limit: 5 * 1024 * 1024,
    }))
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn unique_violation_becomes_conflict() {
    let pool = divesite_db::create_memory_pool().await.unwrap();
    GalleryCategoryRepo::create(&pool, "Macro").await.unwrap();
    let db_err = GalleryCategoryRepo::create(&pool, "Macro").await.unwrap_err();

    let err = AppError::from(db_err);
    assert!(matches!(err, AppError::Core(CoreError::Conflict(_))));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "A record with this name already exists.");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("disk on fire at /var/data".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
    assert!(json.get("stack").is_none());
}

// ---------------------------------------------------------------------------
// Development error detail
// ---------------------------------------------------------------------------

async fn failing_handler() -> AppResult<()> {
    Err(AppError::InternalError("disk on fire".into()))
}

async fn error_detail_app(env: AppEnv) -> (common::TestApp, Router) {
    let app = common::TestApp::with_config(|config| config.environment = env).await;
    let state = AppState::new(app.pool.clone(), app.config.clone());
    let router = Router::new()
        .route("/boom", get(failing_handler))
        .layer(from_fn_with_state(state.clone(), attach_error_detail))
        .with_state(state);
    (app, router)
}

#[tokio::test]
async fn development_500_carries_stack() {
    let (_app, router) = error_detail_app(AppEnv::Development).await;

    let json = common::expect_json(
        common::get(router, "/boom", None).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(json["message"], "An internal error occurred");
    assert_eq!(json["stack"], "disk on fire");
}

#[tokio::test]
async fn production_500_hides_stack() {
    let (_app, router) = error_detail_app(AppEnv::Production).await;

    let json = common::expect_json(
        common::get(router, "/boom", None).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert!(json.get("stack").is_none());
}
