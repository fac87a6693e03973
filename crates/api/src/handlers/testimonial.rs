//! Handlers for the `/testimonials` resource.
//!
//! Visitors submit testimonials publicly; admins edit, feature and delete
//! them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use divesite_core::error::CoreError;
use divesite_core::pagination::Paginated;
use divesite_core::types::DbId;
use divesite_core::upload::{UploadContext, DEFAULT_AVATAR};
use divesite_core::validation::require_fields;
use divesite_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use divesite_db::repositories::TestimonialRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppMultipart, AppPath, AppQuery};
use crate::handlers::not_found;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;
use crate::upload::{FileLimit, MultipartForm};

const AVATAR_FIELD: &str = "avatar";

/// Request body for `PATCH /testimonials/{id}/featured`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedInput {
    pub is_featured: Option<bool>,
}

/// GET /api/testimonials
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<Testimonial>>> {
    let page = TestimonialRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        params.is_featured,
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Testimonial", &id))?;
    Ok(Json(testimonial))
}

/// POST /api/testimonials
///
/// Public. New testimonials are never featured.
pub async fn create(
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(AVATAR_FIELD)).await?;
    require_fields(
        "Name and quote are required.",
        &[("name", form.text("name")), ("quote", form.text("quote"))],
    )?;

    let avatar_url = state
        .uploads
        .save_optional(UploadContext::Generic, form.take_file().as_ref())
        .await?
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    let input = CreateTestimonial {
        name: form.string("name").unwrap_or_default(),
        quote: form.string("quote").unwrap_or_default(),
        origin: form.string("origin"),
        avatar_url: Some(avatar_url),
    };

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(testimonial_id = %testimonial.id, "Testimonial submitted");
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Json<Testimonial>> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(AVATAR_FIELD)).await?;

    TestimonialRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Testimonial", &id))?;

    let avatar_url = state
        .uploads
        .save_optional(UploadContext::Generic, form.take_file().as_ref())
        .await?;

    let input = UpdateTestimonial {
        name: form.string("name"),
        quote: form.string("quote"),
        origin: form.string("origin"),
        avatar_url,
    };

    let testimonial = TestimonialRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found("Testimonial", &id))?;
    tracing::info!(
        user_id = %auth.user_id,
        testimonial_id = %testimonial.id,
        "Testimonial updated"
    );
    Ok(Json(testimonial))
}

/// PATCH /api/testimonials/{id}/featured
pub async fn set_featured(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<FeaturedInput>,
) -> AppResult<Json<Testimonial>> {
    let is_featured = input.is_featured.ok_or_else(|| {
        AppError::Core(CoreError::Validation("isFeatured must be a boolean.".into()))
    })?;

    let testimonial = TestimonialRepo::set_featured(&state.pool, &id, is_featured)
        .await?
        .ok_or_else(|| not_found("Testimonial", &id))?;
    tracing::info!(
        user_id = %auth.user_id,
        testimonial_id = %testimonial.id,
        is_featured,
        "Testimonial featured flag set"
    );
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !TestimonialRepo::delete(&state.pool, &id).await? {
        return Err(not_found("Testimonial", &id));
    }
    tracing::info!(user_id = %auth.user_id, testimonial_id = %id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
