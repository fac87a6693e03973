//! Handlers for the `/articles` resource.
//!
//! Anonymous readers only see published articles in the listing; signed-in
//! admins see every status and may filter by it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use divesite_core::article::ArticleStatus;
use divesite_core::pagination::Paginated;
use divesite_core::types::DbId;
use divesite_core::upload::{UploadContext, DEFAULT_ARTICLE_IMAGE};
use divesite_core::validation::require_fields;
use divesite_db::models::article::{Article, CreateArticle, PublicArticleDetail, UpdateArticle};
use divesite_db::repositories::ArticleRepo;

use crate::error::AppResult;
use crate::extract::{AppMultipart, AppPath, AppQuery};
use crate::handlers::not_found;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::ListParams;
use crate::state::AppState;
use crate::upload::{FileLimit, MultipartForm};

const IMAGE_FIELD: &str = "featuredImage";

/// GET /api/articles
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(auth): MaybeAuthUser,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<Article>>> {
    let status = match auth {
        Some(_) => params.article_status()?,
        None => Some(ArticleStatus::Published),
    };

    let page = ArticleRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        status,
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/articles/{id}
///
/// Also mounted as GET /api/articles/admin/{id} behind the auth guard.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Article", &id))?;
    Ok(Json(article))
}

/// GET /api/articles/admin/{id}
pub async fn get_admin(
    state: State<AppState>,
    _auth: AuthUser,
    id: AppPath<DbId>,
) -> AppResult<Json<Article>> {
    get_by_id(state, id).await
}

/// GET /api/articles/public/{id}
///
/// A published article plus up to three other published articles.
pub async fn get_public(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<PublicArticleDetail>> {
    let main_article = ArticleRepo::find_published(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Article", &id))?;
    let related_articles = ArticleRepo::list_related_published(&state.pool, &id).await?;

    Ok(Json(PublicArticleDetail {
        main_article,
        related_articles,
    }))
}

/// POST /api/articles
///
/// Requires `title`, `status` and `content`. Without an upload the default
/// article image is used.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<Article>)> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;
    require_fields(
        "Title, status, and content are required.",
        &[
            ("title", form.text("title")),
            ("status", form.text("status")),
            ("content", form.text("content")),
        ],
    )?;
    let status: ArticleStatus = form.non_blank("status").unwrap_or_default().trim().parse()?;

    let featured_image = state
        .uploads
        .save_optional(UploadContext::Article, form.take_file().as_ref())
        .await?
        .unwrap_or_else(|| DEFAULT_ARTICLE_IMAGE.to_string());

    let input = CreateArticle {
        title: form.string("title").unwrap_or_default(),
        status,
        content: form.string("content").unwrap_or_default(),
        featured_image,
    };

    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        article_id = %article.id,
        status = %status,
        "Article created"
    );
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/articles/{id}
///
/// Partial update; a duplicate title answers 409.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Json<Article>> {
    let mut form = MultipartForm::read(multipart, FileLimit::Single(IMAGE_FIELD)).await?;
    let status = form
        .non_blank("status")
        .map(|s| s.trim().parse::<ArticleStatus>())
        .transpose()?;

    ArticleRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Article", &id))?;

    let featured_image = state
        .uploads
        .save_optional(UploadContext::Article, form.take_file().as_ref())
        .await?;

    let input = UpdateArticle {
        title: form.string("title"),
        status,
        content: form.string("content"),
        featured_image,
    };

    let article = ArticleRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found("Article", &id))?;
    tracing::info!(user_id = %auth.user_id, article_id = %article.id, "Article updated");
    Ok(Json(article))
}

/// DELETE /api/articles/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !ArticleRepo::delete(&state.pool, &id).await? {
        return Err(not_found("Article", &id));
    }
    tracing::info!(user_id = %auth.user_id, article_id = %id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
