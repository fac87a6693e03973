//! Handlers for the `/submissions` resource (contact-form messages).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use divesite_core::error::CoreError;
use divesite_core::pagination::Paginated;
use divesite_core::types::DbId;
use divesite_core::validation::require_fields;
use divesite_db::models::submission::{CreateSubmission, Submission};
use divesite_db::repositories::SubmissionRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::not_found;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::MessageDataResponse;
use crate::state::AppState;

/// Contact form body for `POST /submissions`.
#[derive(Debug, Deserialize)]
pub struct SubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Request body for `PATCH /submissions/{id}/read`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadInput {
    pub is_read: Option<bool>,
}

/// POST /api/submissions
///
/// Public contact form.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmissionInput>,
) -> AppResult<(StatusCode, Json<MessageDataResponse<Submission>>)> {
    require_fields(
        "Name, email, and message are required.",
        &[
            ("name", input.name.as_deref()),
            ("email", input.email.as_deref()),
            ("message", input.message.as_deref()),
        ],
    )?;

    let submission = SubmissionRepo::create(
        &state.pool,
        &CreateSubmission {
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            message: input.message.unwrap_or_default(),
        },
    )
    .await?;
    tracing::info!(submission_id = %submission.id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(MessageDataResponse::new(
            "Submission received successfully.",
            submission,
        )),
    ))
}

/// GET /api/submissions
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Paginated<Submission>>> {
    let page = SubmissionRepo::list(
        &state.pool,
        state.search(params.search.as_deref()),
        params.is_read,
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// GET /api/submissions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found("Submission", &id))?;
    Ok(Json(submission))
}

/// PATCH /api/submissions/{id}/read
pub async fn set_read(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReadInput>,
) -> AppResult<Json<Submission>> {
    let is_read = input.is_read.ok_or_else(|| {
        AppError::Core(CoreError::Validation("isRead must be a boolean.".into()))
    })?;

    let submission = SubmissionRepo::set_read(&state.pool, &id, is_read)
        .await?
        .ok_or_else(|| not_found("Submission", &id))?;
    tracing::info!(
        user_id = %auth.user_id,
        submission_id = %submission.id,
        is_read,
        "Submission read flag set"
    );
    Ok(Json(submission))
}

/// DELETE /api/submissions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !SubmissionRepo::delete(&state.pool, &id).await? {
        return Err(not_found("Submission", &id));
    }
    tracing::info!(user_id = %auth.user_id, submission_id = %id, "Submission deleted");
    Ok(StatusCode::NO_CONTENT)
}
