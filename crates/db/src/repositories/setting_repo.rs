//! Repository for the singleton `settings` row.
//!
//! The row is created lazily with default documents the first time any
//! method touches it. Each update writes only its own JSON column.

use chrono::Utc;
use divesite_core::settings::{ExperienceMedia, HeroSlide, SocialLinks, SETTINGS_ID};
use sqlx::types::Json;

use crate::models::setting::Setting;
use crate::DbPool;

const COLUMNS: &str = "id, hero, experience, social_links, updated_at";

pub struct SettingRepo;

impl SettingRepo {
    /// Insert the default row if it does not exist yet. Idempotent.
    pub async fn ensure(pool: &DbPool) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO settings (id, hero, experience, social_links, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SETTINGS_ID)
        .bind(Json(Vec::<HeroSlide>::new()))
        .bind(Json(ExperienceMedia::default()))
        .bind(Json(SocialLinks::default()))
        .bind(Utc::now())
        .execute(pool)
        .await?;
        if result.rows_affected() > 0 {
            tracing::info!(settings_id = SETTINGS_ID, "Created default settings row");
        }
        Ok(())
    }

    /// Fetch the settings row, creating it with defaults if necessary.
    pub async fn get(pool: &DbPool) -> Result<Setting, sqlx::Error> {
        Self::ensure(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = ?1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_ID)
            .fetch_one(pool)
            .await
    }

    /// Replace the hero slide list.
    pub async fn update_hero(pool: &DbPool, slides: &[HeroSlide]) -> Result<Setting, sqlx::Error> {
        Self::ensure(pool).await?;
        let query = format!(
            "UPDATE settings SET hero = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_ID)
            .bind(Json(slides))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Merge new experience media over the stored document.
    ///
    /// This is a read-modify-write without a version check: two concurrent
    /// experience updates can overwrite each other.
    pub async fn update_experience(
        pool: &DbPool,
        video_url: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Setting, sqlx::Error> {
        let current = Self::get(pool).await?;
        let merged = current.experience.0.merged(video_url, image_url);

        let query = format!(
            "UPDATE settings SET experience = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_ID)
            .bind(Json(&merged))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Replace the social links document.
    pub async fn update_social_links(
        pool: &DbPool,
        links: &SocialLinks,
    ) -> Result<Setting, sqlx::Error> {
        Self::ensure(pool).await?;
        let query = format!(
            "UPDATE settings SET social_links = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_ID)
            .bind(Json(links))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
