//! Article model and DTOs.

use chrono::NaiveDate;
use divesite_core::article::ArticleStatus;
use divesite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: DbId,
    pub title: String,
    /// `"Draft"` or `"Published"`.
    pub status: String,
    pub date: NaiveDate,
    /// HTML body produced by the admin rich-text editor.
    pub content: String,
    pub featured_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateArticle {
    pub title: String,
    pub status: ArticleStatus,
    pub content: String,
    pub featured_image: String,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Debug, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub status: Option<ArticleStatus>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
}

/// Public article page: the article plus a few other published ones.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticleDetail {
    pub main_article: Article,
    pub related_articles: Vec<Article>,
}
