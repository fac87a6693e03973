//! Handlers for the `/auth` resource (login, logout, current user).

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use divesite_core::error::CoreError;
use divesite_core::types::DbId;
use divesite_core::validation::require_fields;
use divesite_db::models::user::UserResponse;
use divesite_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::not_found;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response. The token is also set as a cookie when
/// cookies are enabled.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Unknown email and wrong password both answer 401 with the same message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    require_fields(
        "Email and password are required.",
        &[
            ("email", input.email.as_deref()),
            ("password", input.password.as_deref()),
        ],
    )?;
    let email = input.email.unwrap_or_default();
    let password = input.password.unwrap_or_default();

    let user = UserRepo::find_by_email(&state.pool, email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let config = &state.config;
    let token = generate_access_token(&user.id, &user.role, &config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let jar = if config.cookie.enabled {
        jar.add(session_cookie(
            &config.cookie,
            config.environment,
            token.clone(),
            config.jwt.expiry_secs(),
        ))
    } else {
        jar
    };

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        jar,
        Json(LoginResponse {
            token,
            user: LoginUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. Bearer tokens stay valid until they expire.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(removal_cookie(&state.config.cookie, state.config.environment));
    tracing::info!(user_id = %auth.user_id, "User logged out");
    (jar, Json(MessageResponse::new("Logged out successfully.")))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, &auth.user_id)
        .await?
        .ok_or_else(|| not_found("User", &auth.user_id))?;
    Ok(Json(user.into()))
}
