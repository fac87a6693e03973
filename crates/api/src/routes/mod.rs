pub mod article;
pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod health;
pub mod package;
pub mod settings;
pub mod submission;
pub mod testimonial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/logout                                 logout (requires auth)
/// /auth/me                                     current user (requires auth)
///
/// /packages                                    list, create
/// /packages/{id}                               get, update, delete
///
/// /articles                                    list (optional auth), create
/// /articles/{id}                               get, update, delete
/// /articles/public/{id}                        published detail + related
/// /articles/admin/{id}                         get (requires auth)
///
/// /gallery/images                              list (?category), create
/// /gallery/images/{id}                         get, update, delete
/// /gallery/categories                          list, create
/// /gallery/categories/{id}                     get, rename, delete
/// /gallery/ckeditor                            editor image upload (POST)
///
/// /testimonials                                list (?isFeatured), create (public)
/// /testimonials/{id}                           get, update, delete
/// /testimonials/{id}/featured                  set featured (PATCH)
///
/// /submissions                                 create (public), list
/// /submissions/{id}                            get, delete
/// /submissions/{id}/read                       set read (PATCH)
///
/// /settings                                    get (public)
/// /settings/hero                               replace slides (PUT)
/// /settings/hero/image                         upload hero image (POST)
/// /settings/experience                         update experience media (PUT)
/// /settings/social                             replace social links (PUT)
///
/// /dashboard                                   admin summary (GET)
/// ```
///
/// Write endpoints require auth except testimonial and submission creation.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/packages", package::router())
        .nest("/articles", article::router())
        .nest("/gallery", gallery::router())
        .nest("/testimonials", testimonial::router())
        .nest("/submissions", submission::router())
        .nest("/settings", settings::router())
        .nest("/dashboard", dashboard::router())
}
