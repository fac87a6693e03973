//! Repository for the `testimonials` table.

use chrono::Utc;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::search::TextSearch;
use crate::DbPool;

const COLUMNS: &str = "id, name, quote, origin, avatar_url, is_featured, created_at";

const SEARCH_COLUMNS: &[&str] = &["name", "quote", "origin"];

/// Provides CRUD operations for customer testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial. New rows are never featured.
    pub async fn create(
        pool: &DbPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (id, name, quote, origin, avatar_url, is_featured, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.origin)
            .bind(&input.avatar_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = ?1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials newest-first, filtered by search term and featured flag.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        is_featured: Option<bool>,
        page: PageRequest,
    ) -> Result<Paginated<Testimonial>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);

        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE {filter} AND (?2 IS NULL OR is_featured = ?2)
             ORDER BY created_at DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        let items = sqlx::query_as::<_, Testimonial>(&query)
            .bind(search.term)
            .bind(is_featured)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM testimonials WHERE {filter} AND (?2 IS NULL OR is_featured = ?2)"
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .bind(is_featured)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE(?2, name),
                quote = COALESCE(?3, quote),
                origin = COALESCE(?4, origin),
                avatar_url = COALESCE(?5, avatar_url)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.origin)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Set the featured flag. Returns `None` if the testimonial does not exist.
    pub async fn set_featured(
        pool: &DbPool,
        id: &str,
        is_featured: bool,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET is_featured = ?2
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
