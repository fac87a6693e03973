//! Origin allow-list enforcement.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use divesite_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Reject requests whose `Origin` header is not in `CORS_ORIGINS`.
///
/// Requests without an `Origin` header (curl, server-to-server, same-origin
/// GETs) pass through.
pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(ORIGIN) {
        let allowed = origin
            .to_str()
            .map(|o| state.config.cors_origins.iter().any(|allowed| allowed == o))
            .unwrap_or(false);

        if !allowed {
            tracing::warn!(
                origin = ?origin,
                path = %request.uri().path(),
                "Rejected disallowed origin"
            );
            return AppError::Core(CoreError::Forbidden("Not allowed by CORS".into()))
                .into_response();
        }
    }

    next.run(request).await
}
