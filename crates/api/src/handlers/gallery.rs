//! Handlers for the `/gallery` resources: images, categories, and inline
//! images uploaded from the admin rich-text editor.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use divesite_core::pagination::Paginated;
use divesite_core::types::DbId;
use divesite_core::upload::{UploadContext, UploadError};
use divesite_core::validation::require_fields;
use divesite_db::models::gallery::{
    CreateGalleryImage, GalleryCategory, GalleryImage, UpdateGalleryImage,
};
use divesite_db::repositories::{GalleryCategoryRepo, GalleryImageRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppMultipart, AppPath, AppQuery};
use crate::handlers::not_found;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;
use crate::upload::{FileLimit, MultipartForm};

const IMAGE_FIELD: &str = "upload";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for category create and rename.
#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: Option<String>,
}

/// Response for an editor inline upload.
#[derive(Debug, Serialize)]
pub struct EditorUploadResponse {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// GET /api/gallery/images
pub async fn list_images(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<GalleryImage>>> {
    let page = GalleryImageRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        params.category(),
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/gallery/images/{id}
pub async fn get_image(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<GalleryImage>> {
    let image = GalleryImageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("GalleryImage", &id))?;
    Ok(Json(image))
}

/// POST /api/gallery/images
///
/// Requires the `upload` file plus `caption` and `category`.
pub async fn create_image(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;
    let file = form.take_file();
    require_fields(
        "Image file, caption, and category are required.",
        &[
            (IMAGE_FIELD, file.as_ref().map(|f| f.content_type.as_str())),
            ("caption", form.text("caption")),
            ("category", form.text("category")),
        ],
    )?;
    let Some(file) = file else {
        return Err(UploadError::Missing.into());
    };

    let url = state.uploads.save(UploadContext::Gallery, &file).await?;
    let input = CreateGalleryImage {
        url,
        caption: form.string("caption").unwrap_or_default(),
        category: form.string("category").unwrap_or_default(),
    };

    let image = GalleryImageRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %auth.user_id, image_id = %image.id, "Gallery image created");
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/gallery/images/{id}
pub async fn update_image(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Json<GalleryImage>> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;

    GalleryImageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("GalleryImage", &id))?;

    let url = state
        .uploads
        .save_optional(UploadContext::Gallery, form.take_file().as_ref())
        .await?;

    let input = UpdateGalleryImage {
        url,
        caption: form.string("caption"),
        category: form.string("category"),
    };

    let image = GalleryImageRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found("GalleryImage", &id))?;
    tracing::info!(user_id = %auth.user_id, image_id = %image.id, "Gallery image updated");
    Ok(Json(image))
}

/// DELETE /api/gallery/images/{id}
///
/// Deletes the row, then the stored file. A missing file does not fail the
/// request.
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let image = GalleryImageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("GalleryImage", &id))?;

    if !GalleryImageRepo::delete(&state.pool, &id).await? {
        return Err(not_found("GalleryImage", &id));
    }
    state.uploads.remove(&image.url).await;

    tracing::info!(user_id = %auth.user_id, image_id = %id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/gallery/ckeditor
///
/// Stores an inline editor image and returns its URL. No row is created.
pub async fn upload_editor_image(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<EditorUploadResponse>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;
    let file = form.take_file().ok_or(UploadError::Missing)?;

    let url = state.uploads.save(UploadContext::Gallery, &file).await?;
    tracing::info!(user_id = %auth.user_id, url = %url, "Editor image uploaded");
    Ok((StatusCode::CREATED, Json(EditorUploadResponse { url })))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/gallery/categories
pub async fn list_categories(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<GalleryCategory>>> {
    let page = GalleryCategoryRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/gallery/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<GalleryCategory>> {
    let category = GalleryCategoryRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("GalleryCategory", &id))?;
    Ok(Json(category))
}

/// POST /api/gallery/categories
///
/// A duplicate name answers 409.
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<GalleryCategory>)> {
    require_fields("Category name is required.", &[("name", input.name.as_deref())])?;
    let name = input.name.unwrap_or_default();

    let category = GalleryCategoryRepo::create(&state.pool, name.trim()).await?;
    tracing::info!(user_id = %auth.user_id, category_id = %category.id, "Gallery category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/gallery/categories/{id}
///
/// Renames the category. Images keep the category string they were saved
/// with.
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<Json<GalleryCategory>> {
    require_fields("Category name is required.", &[("name", input.name.as_deref())])?;
    let name = input.name.unwrap_or_default();

    let category = GalleryCategoryRepo::rename(&state.pool, &id, name.trim())
        .await?
        .ok_or_else(|| not_found("GalleryCategory", &id))?;
    tracing::info!(user_id = %auth.user_id, category_id = %category.id, "Gallery category renamed");
    Ok(Json(category))
}

/// DELETE /api/gallery/categories/{id}
///
/// Images in the category are left untouched.
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !GalleryCategoryRepo::delete(&state.pool, &id).await? {
        return Err(not_found("GalleryCategory", &id));
    }
    tracing::info!(user_id = %auth.user_id, category_id = %id, "Gallery category deleted");
    Ok(StatusCode::NO_CONTENT)
}
