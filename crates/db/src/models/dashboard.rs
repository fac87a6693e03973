//! Aggregates shown on the admin dashboard.

use chrono::NaiveDate;
use divesite_core::settings::{ExperienceMedia, HeroSlide};
use divesite_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentArticle {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub package_count: i64,
    pub article_count: i64,
    pub gallery_image_count: i64,
    pub testimonial_count: i64,
    pub submission_count: i64,
    pub unread_submission_count: i64,
    pub hero_headlines: Vec<HeroSlide>,
    pub experience_media: ExperienceMedia,
    pub recent_articles: Vec<RecentArticle>,
    pub recent_submissions: Vec<RecentSubmission>,
}
