//! Route definitions for the `/submissions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST   /            -> create (public)
/// GET    /            -> list (?isRead)
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete
/// PATCH  /{id}/read   -> set_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(submission::list).post(submission::create))
        .route(
            "/{id}",
            get(submission::get_by_id).delete(submission::delete),
        )
        .route("/{id}/read", patch(submission::set_read))
}
