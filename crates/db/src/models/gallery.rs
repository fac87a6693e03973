//! Gallery image and category models.

use divesite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: DbId,
    pub url: String,
    pub caption: String,
    /// Category name. Not a foreign key.
    pub category: String,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateGalleryImage {
    pub url: String,
    pub caption: String,
    pub category: String,
}

#[derive(Debug, Default)]
pub struct UpdateGalleryImage {
    pub url: Option<String>,
    pub caption: Option<String>,
    pub category: Option<String>,
}

/// A row from the `gallery_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCategory {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
