use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use divesite_core::error::CoreError;
use divesite_core::upload::{UploadError, ALLOWED_MIME_TYPES};
use serde_json::{json, Map, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`UploadError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// `{ "message", "code" }` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `divesite_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected or malformed upload.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A database error from sqlx. Unique violations convert to
    /// [`CoreError::Conflict`] instead.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the framework-level size cap.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Underlying cause of a 500 response, attached as a response extension.
///
/// The client-facing message is always sanitized; in development the
/// `error_detail` middleware copies this text into a `stack` field.
#[derive(Debug, Clone)]
pub struct ErrorReport(pub String);

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let message = unique_conflict_message(db_err.message());
                return AppError::Core(CoreError::Conflict(message));
            }
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut extras = Map::new();
        let mut report: Option<String> = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with ID {id} not found."),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MissingFields { message, fields } => {
                    extras.insert("missing".into(), json!(fields));
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Upload errors ---
            AppError::Upload(err) => match err {
                UploadError::InvalidType(_) => {
                    extras.insert("allowedTypes".into(), json!(ALLOWED_MIME_TYPES));
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string())
                }
                UploadError::TooLarge { .. } => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    err.to_string(),
                ),
                UploadError::TooManyFiles | UploadError::Missing => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                let (status, code, message) = classify_sqlx_error(err);
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    report = Some(err.to_string());
                }
                (status, code, message)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                report = Some(msg.clone());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let mut body = Map::new();
        body.insert("message".into(), Value::String(message));
        body.insert("code".into(), Value::String(code.to_string()));
        body.extend(extras);

        let mut response = (status, axum::Json(Value::Object(body))).into_response();
        if let Some(detail) = report {
            response.extensions_mut().insert(ErrorReport(detail));
        }
        response
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found.".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}

/// Turn `"UNIQUE constraint failed: articles.title"` into a message naming
/// the column.
fn unique_conflict_message(db_message: &str) -> String {
    let column = db_message
        .rsplit_once(':')
        .map(|(_, cols)| cols.trim())
        .and_then(|cols| cols.split(',').next())
        .and_then(|col| col.trim().rsplit('.').next())
        .filter(|col| !col.is_empty());

    match column {
        Some(column) => format!("A record with this {column} already exists."),
        None => "A record with this value already exists.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge("Request body too large.".to_string())
        } else {
            AppError::BadRequest(err.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_message_names_column() {
        assert_eq!(
            unique_conflict_message("UNIQUE constraint failed: articles.title"),
            "A record with this title already exists."
        );
        assert_eq!(
            unique_conflict_message("UNIQUE constraint failed: gallery_categories.name"),
            "A record with this name already exists."
        );
        assert_eq!(
            unique_conflict_message("something else"),
            "A record with this value already exists."
        );
    }
}
