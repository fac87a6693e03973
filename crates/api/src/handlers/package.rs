//! Handlers for the `/packages` resource.
//!
//! Create and update take `multipart/form-data` with an optional
//! `featuredImage` file and `inclusions` as newline-separated text.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use divesite_core::package::parse_inclusions;
use divesite_core::pagination::Paginated;
use divesite_core::types::DbId;
use divesite_core::upload::UploadContext;
use divesite_core::validation::require_fields;
use divesite_db::models::package::{CreatePackage, Package, UpdatePackage};
use divesite_db::repositories::PackageRepo;

use crate::error::AppResult;
use crate::extract::{AppMultipart, AppPath, AppQuery};
use crate::handlers::not_found;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;
use crate::upload::{FileLimit, MultipartForm};

const IMAGE_FIELD: &str = "featuredImage";

/// GET /api/packages
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<Package>>> {
    let page = PackageRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/packages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Package>> {
    let package = PackageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Package", &id))?;
    Ok(Json(package))
}

/// POST /api/packages
///
/// Requires `title` and `price`. Without an image, `imageUrl` is null.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<Package>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;
    require_fields(
        "Title and price are required.",
        &[("title", form.text("title")), ("price", form.text("price"))],
    )?;

    let image_url = state
        .uploads
        .save_optional(UploadContext::Package, form.take_file().as_ref())
        .await?;

    let input = CreatePackage {
        title: form.string("title").unwrap_or_default(),
        price: form.string("price").unwrap_or_default(),
        description: form.text("description").unwrap_or_default().to_string(),
        inclusions: form.text("inclusions").map(parse_inclusions).unwrap_or_default(),
        image_url,
    };

    let package = PackageRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %auth.user_id, package_id = %package.id, "Package created");
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/packages/{id}
///
/// Only non-empty fields change; a new `featuredImage` replaces the stored path.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Json<Package>> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;

    PackageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Package", &id))?;

    let image_url = state
        .uploads
        .save_optional(UploadContext::Package, form.take_file().as_ref())
        .await?;

    let input = UpdatePackage {
        title: form.string("title"),
        price: form.string("price"),
        description: form.string("description"),
        inclusions: form.non_blank("inclusions").map(parse_inclusions),
        image_url,
    };

    let package = PackageRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found("Package", &id))?;
    tracing::info!(user_id = %auth.user_id, package_id = %package.id, "Package updated");
    Ok(Json(package))
}

/// DELETE /api/packages/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !PackageRepo::delete(&state.pool, &id).await? {
        return Err(not_found("Package", &id));
    }
    tracing::info!(user_id = %auth.user_id, package_id = %id, "Package deleted");
    Ok(StatusCode::NO_CONTENT)
}
