use divesite_core::error::CoreError;

use crate::error::AppError;

pub mod article;
pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod package;
pub mod settings;
pub mod submission;
pub mod testimonial;

/// 404 for a missing row.
pub(crate) fn not_found(entity: &'static str, id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}
