//! Repository for the `gallery_categories` table.
//!
//! Category names are unique; inserting or renaming to an existing name
//! fails with a unique-constraint violation.

use chrono::Utc;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;

use crate::models::gallery::GalleryCategory;
use crate::search::TextSearch;
use crate::DbPool;

const COLUMNS: &str = "id, name, created_at";

const SEARCH_COLUMNS: &[&str] = &["name"];

pub struct GalleryCategoryRepo;

impl GalleryCategoryRepo {
    pub async fn create(pool: &DbPool, name: &str) -> Result<GalleryCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_categories (id, name, created_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(new_id())
            .bind(name)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &DbPool,
        id: &str,
    ) -> Result<Option<GalleryCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_categories WHERE id = ?1");
        sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories alphabetically by name.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        page: PageRequest,
    ) -> Result<Paginated<GalleryCategory>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);

        let query = format!(
            "SELECT {COLUMNS} FROM gallery_categories
             WHERE {filter}
             ORDER BY name ASC, id ASC
             LIMIT ?2 OFFSET ?3"
        );
        let items = sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(search.term)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM gallery_categories WHERE {filter}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Rename a category. Images keep their old category string.
    pub async fn rename(
        pool: &DbPool,
        id: &str,
        name: &str,
    ) -> Result<Option<GalleryCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_categories SET name = ?2
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_categories WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
