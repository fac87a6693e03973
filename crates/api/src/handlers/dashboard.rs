//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::Json;
use divesite_db::models::dashboard::DashboardStats;
use divesite_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Entity counts, the current hero and experience documents, and the five
/// newest articles and submissions.
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
