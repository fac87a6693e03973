//! Contact-form submission model.

use divesite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: Timestamp,
    pub is_read: bool,
}

#[derive(Debug)]
pub struct CreateSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
