//! Route definitions for the `/articles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /              -> list (drafts visible to signed-in users)
/// POST   /              -> create (multipart)
/// GET    /public/{id}   -> get_public
/// GET    /admin/{id}    -> get_admin
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (multipart)
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::list).post(article::create))
        .route("/public/{id}", get(article::get_public))
        .route("/admin/{id}", get(article::get_admin))
        .route(
            "/{id}",
            get(article::get_by_id)
                .put(article::update)
                .delete(article::delete),
        )
}
