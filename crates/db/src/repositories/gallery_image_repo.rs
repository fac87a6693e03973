//! Repository for the `gallery_images` table.

use chrono::Utc;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;

use crate::models::gallery::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};
use crate::search::TextSearch;
use crate::DbPool;

const COLUMNS: &str = "id, url, caption, category, created_at";

const SEARCH_COLUMNS: &[&str] = &["caption", "category"];

/// Provides CRUD operations for gallery images.
pub struct GalleryImageRepo;

impl GalleryImageRepo {
    pub async fn create(
        pool: &DbPool,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (id, url, caption, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(new_id())
            .bind(&input.url)
            .bind(&input.caption)
            .bind(&input.category)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_images WHERE id = ?1");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List images newest-first, filtered by search term and exact category.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        category: Option<&str>,
        page: PageRequest,
    ) -> Result<Paginated<GalleryImage>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);

        let query = format!(
            "SELECT {COLUMNS} FROM gallery_images
             WHERE {filter} AND (?2 IS NULL OR category = ?2)
             ORDER BY created_at DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        let items = sqlx::query_as::<_, GalleryImage>(&query)
            .bind(search.term)
            .bind(category)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM gallery_images WHERE {filter} AND (?2 IS NULL OR category = ?2)"
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .bind(category)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images SET
                url = COALESCE(?2, url),
                caption = COALESCE(?3, caption),
                category = COALESCE(?4, category)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(&input.caption)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
