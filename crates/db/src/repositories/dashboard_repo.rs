//! Read-only aggregates for the admin dashboard.

use crate::models::dashboard::{DashboardStats, RecentArticle, RecentSubmission};
use crate::repositories::SettingRepo;
use crate::DbPool;

/// Number of recent articles and submissions listed on the dashboard.
pub const RECENT_LIMIT: i64 = 5;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Collect entity counts, the current hero/experience documents and the
    /// newest articles and submissions.
    pub async fn stats(pool: &DbPool) -> Result<DashboardStats, sqlx::Error> {
        let (
            package_count,
            article_count,
            gallery_image_count,
            testimonial_count,
            submission_count,
            unread_submission_count,
        ) = sqlx::query_as::<_, (i64, i64, i64, i64, i64, i64)>(
            "SELECT
                (SELECT COUNT(*) FROM packages),
                (SELECT COUNT(*) FROM articles),
                (SELECT COUNT(*) FROM gallery_images),
                (SELECT COUNT(*) FROM testimonials),
                (SELECT COUNT(*) FROM submissions),
                (SELECT COUNT(*) FROM submissions WHERE is_read = 0)",
        )
        .fetch_one(pool)
        .await?;

        let recent_articles = sqlx::query_as::<_, RecentArticle>(
            "SELECT id, title, date FROM articles
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
        )
        .bind(RECENT_LIMIT)
        .fetch_all(pool)
        .await?;

        let recent_submissions = sqlx::query_as::<_, RecentSubmission>(
            "SELECT id, name, email, message, is_read FROM submissions
             ORDER BY date DESC, id DESC
             LIMIT ?1",
        )
        .bind(RECENT_LIMIT)
        .fetch_all(pool)
        .await?;

        let settings = SettingRepo::get(pool).await?;

        Ok(DashboardStats {
            package_count,
            article_count,
            gallery_image_count,
            testimonial_count,
            submission_count,
            unread_submission_count,
            hero_headlines: settings.hero.0,
            experience_media: settings.experience.0,
            recent_articles,
            recent_submissions,
        })
    }
}
