//! Handlers for the `/settings` singleton.
//!
//! Each update writes only its own document (hero, experience or social
//! links) and answers `{ message, data }` with the updated document.

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use divesite_core::error::CoreError;
use divesite_core::settings::{
    parse_hero_slides, parse_social_links, ExperienceMedia, HeroSlide, SocialLinks,
};
use divesite_core::upload::{UploadContext, UploadError};
use divesite_db::models::setting::SiteSettings;
use divesite_db::repositories::SettingRepo;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppMultipart};
use crate::middleware::auth::AuthUser;
use crate::response::MessageDataResponse;
use crate::state::AppState;
use crate::upload::{FileLimit, MultipartForm};

const HERO_IMAGE_FIELD: &str = "heroImage";
const EXPERIENCE_IMAGE_FIELD: &str = "experienceImage";

/// Response for `POST /settings/hero/image`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImageResponse {
    pub message: String,
    pub image_url: String,
}

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SettingRepo::get(&state.pool).await?;
    Ok(Json(settings.into()))
}

/// PUT /api/settings/hero
///
/// Accepts either a JSON array of slides, or a multipart form whose `hero`
/// text field holds that array and whose file parts are named after the id
/// of the slide they illustrate.
pub async fn update_hero(
    State(state): State<AppState>,
    auth: AuthUser,
    request: Request,
) -> AppResult<Json<MessageDataResponse<Vec<HeroSlide>>>> {
    let slides = if is_multipart(request.headers()) {
        let AppMultipart(multipart) = AppMultipart::from_request(request, &state).await?;
        let form = MultipartForm::read(multipart, FileLimit::Any).await?;
        hero_from_form(&state, form).await?
    } else {
        let AppJson(body) = AppJson::<Value>::from_request(request, &state).await?;
        parse_hero_slides(body)?
    };

    let updated = SettingRepo::update_hero(&state.pool, &slides).await?;
    tracing::info!(user_id = %auth.user_id, slides = slides.len(), "Hero settings updated");
    Ok(Json(MessageDataResponse::new(
        "Hero settings updated.",
        updated.hero.0,
    )))
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

async fn hero_from_form(state: &AppState, mut form: MultipartForm) -> AppResult<Vec<HeroSlide>> {
    let raw = form
        .text("hero")
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid data format.".into())))?;
    let body: Value = serde_json::from_str(raw)
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid data format.".into())))?;
    let mut slides = parse_hero_slides(body)?;

    let files = form.take_files();
    if let Some(orphan) = files
        .iter()
        .find(|file| !slides.iter().any(|slide| slide.id == file.field))
    {
        return Err(AppError::BadRequest(format!(
            "No hero slide with id '{}'.",
            orphan.field
        )));
    }

    for file in &files {
        let url = state.uploads.save(UploadContext::Hero, file).await?;
        for slide in slides.iter_mut().filter(|slide| slide.id == file.field) {
            slide.image_url = url.clone();
        }
    }
    Ok(slides)
}

/// POST /api/settings/hero/image
///
/// Stores a hero image. The slide list is saved separately via PUT.
pub async fn upload_hero_image(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<HeroImageResponse>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(HERO_IMAGE_FIELD)).await?;
    let file = form.take_file().ok_or(UploadError::Missing)?;

    let image_url = state.uploads.save(UploadContext::Hero, &file).await?;
    tracing::info!(user_id = %auth.user_id, image_url = %image_url, "Hero image uploaded");
    Ok((
        StatusCode::CREATED,
        Json(HeroImageResponse {
            message: "File uploaded successfully!".into(),
            image_url,
        }),
    ))
}

/// PUT /api/settings/experience
///
/// Multipart with optional `videoUrl` text and optional `experienceImage`
/// file. Whatever is not supplied keeps its stored value.
pub async fn update_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Json<MessageDataResponse<ExperienceMedia>>> {
    let mut form =
        MultipartForm::read(multipart, FileLimit::Single(EXPERIENCE_IMAGE_FIELD)).await?;

    let image_url = state
        .uploads
        .save_optional(UploadContext::Experience, form.take_file().as_ref())
        .await?;

    let updated = SettingRepo::update_experience(
        &state.pool,
        form.non_blank("videoUrl"),
        image_url.as_deref(),
    )
    .await?;
    tracing::info!(user_id = %auth.user_id, "Experience settings updated");
    Ok(Json(MessageDataResponse::new(
        "Experience settings updated.",
        updated.experience.0,
    )))
}

/// PUT /api/settings/social
pub async fn update_social(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageDataResponse<SocialLinks>>> {
    let links = parse_social_links(body)?;

    let updated = SettingRepo::update_social_links(&state.pool, &links).await?;
    tracing::info!(user_id = %auth.user_id, "Social links updated");
    Ok(Json(MessageDataResponse::new(
        "Social links updated.",
        updated.social_links.0,
    )))
}
