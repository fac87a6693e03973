//! Route definitions for the `/settings` singleton.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET  /              -> get
/// PUT  /hero          -> update_hero (JSON or multipart)
/// POST /hero/image    -> upload_hero_image (multipart)
/// PUT  /experience    -> update_experience (multipart)
/// PUT  /social        -> update_social
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get))
        .route("/hero", put(settings::update_hero))
        .route("/hero/image", post(settings::upload_hero_image))
        .route("/experience", put(settings::update_experience))
        .route("/social", put(settings::update_social))
}
