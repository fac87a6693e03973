//! Route definitions for the `/gallery` resource: images, categories and the
//! rich-text editor upload endpoint.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /images                -> list_images (?category)
/// POST   /images                -> create_image (multipart)
/// GET    /images/{id}           -> get_image
/// PUT    /images/{id}           -> update_image (multipart)
/// DELETE /images/{id}           -> delete_image
///
/// GET    /categories            -> list_categories
/// POST   /categories            -> create_category
/// GET    /categories/{id}       -> get_category
/// PUT    /categories/{id}       -> update_category
/// DELETE /categories/{id}       -> delete_category
///
/// POST   /ckeditor              -> upload_editor_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    let image_routes = Router::new()
        .route("/", get(gallery::list_images).post(gallery::create_image))
        .route(
            "/{id}",
            get(gallery::get_image)
                .put(gallery::update_image)
                .delete(gallery::delete_image),
        );

    let category_routes = Router::new()
        .route(
            "/",
            get(gallery::list_categories).post(gallery::create_category),
        )
        .route(
            "/{id}",
            get(gallery::get_category)
                .put(gallery::update_category)
                .delete(gallery::delete_category),
        );

    Router::new()
        .nest("/images", image_routes)
        .nest("/categories", category_routes)
        .route("/ckeditor", post(gallery::upload_editor_image))
}
