//! Token-based authentication extractors for Axum handlers.
//!
//! The token is taken from `Authorization: Bearer <token>` when that header
//! uses the Bearer scheme; otherwise from the session cookie. A bad header
//! token is rejected even if a valid cookie is also present.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use divesite_core::error::CoreError;
use divesite_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a valid access token.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"ADMIN"`).
    pub role: String,
}

/// Where a token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenSource {
    Header,
    Cookie,
}

fn find_token(parts: &Parts, state: &AppState) -> Option<(TokenSource, String)> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer"));
    if let Some(token) = bearer {
        return Some((TokenSource::Header, token.trim().to_string()));
    }

    if !state.config.cookie.enabled {
        return None;
    }
    CookieJar::from_headers(&parts.headers)
        .get(&state.config.cookie.name)
        .map(|cookie| (TokenSource::Cookie, cookie.value().to_string()))
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthUser, AppError> {
    let (source, token) = find_token(parts, state).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Not authorized, no token provided".into(),
        ))
    })?;

    let claims = validate_token(&token, &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, source = ?source, "Token verification failed");
        let message = match source {
            TokenSource::Header => "Invalid token",
            TokenSource::Cookie => "Invalid session token",
        };
        AppError::Core(CoreError::Unauthorized(message.into()))
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)
    }
}

/// The authenticated user if the request carries a valid token, else `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts, state).ok()))
    }
}
