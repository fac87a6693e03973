//! Dive package model and DTOs.

use divesite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: DbId,
    pub title: String,
    /// Pre-formatted with currency, e.g. `"IDR 1,500,000"`.
    pub price: String,
    pub description: String,
    pub inclusions: Json<Vec<String>>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreatePackage {
    pub title: String,
    pub price: String,
    pub description: String,
    pub inclusions: Vec<String>,
    pub image_url: Option<String>,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Debug, Default)]
pub struct UpdatePackage {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub inclusions: Option<Vec<String>>,
    pub image_url: Option<String>,
}
