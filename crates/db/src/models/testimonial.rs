//! Testimonial model and DTOs.

use divesite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub quote: String,
    pub origin: Option<String>,
    pub avatar_url: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

/// New testimonials are never featured; an admin promotes them later.
#[derive(Debug)]
pub struct CreateTestimonial {
    pub name: String,
    pub quote: String,
    pub origin: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub origin: Option<String>,
    pub avatar_url: Option<String>,
}
