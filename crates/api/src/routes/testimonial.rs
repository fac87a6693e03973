//! Route definitions for the `/testimonials` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /                -> list (?isFeatured)
/// POST   /                -> create (public, multipart)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update (multipart)
/// DELETE /{id}            -> delete
/// PATCH  /{id}/featured   -> set_featured
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .put(testimonial::update)
                .delete(testimonial::delete),
        )
        .route("/{id}/featured", patch(testimonial::set_featured))
}
