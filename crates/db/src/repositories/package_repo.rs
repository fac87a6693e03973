//! Repository for the `packages` table.

use chrono::Utc;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;
use sqlx::types::Json;

use crate::models::package::{CreatePackage, Package, UpdatePackage};
use crate::search::TextSearch;
use crate::DbPool;

/// Column list for packages queries.
const COLUMNS: &str = "id, title, price, description, inclusions, image_url, created_at";

/// Columns matched by free-text search.
const SEARCH_COLUMNS: &[&str] = &["title", "description"];

/// Provides CRUD operations for dive packages.
pub struct PackageRepo;

impl PackageRepo {
    pub async fn create(pool: &DbPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages (id, title, price, description, inclusions, image_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.price)
            .bind(&input.description)
            .bind(Json(&input.inclusions))
            .bind(&input.image_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = ?1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List packages newest-first, optionally filtered by a search term.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        page: PageRequest,
    ) -> Result<Paginated<Package>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);

        let query = format!(
            "SELECT {COLUMNS} FROM packages
             WHERE {filter}
             ORDER BY created_at DESC, id DESC
             LIMIT ?2 OFFSET ?3"
        );
        let items = sqlx::query_as::<_, Package>(&query)
            .bind(search.term)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM packages WHERE {filter}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Update a package. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                title = COALESCE(?2, title),
                price = COALESCE(?3, price),
                description = COALESCE(?4, description),
                inclusions = COALESCE(?5, inclusions),
                image_url = COALESCE(?6, image_url)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.price)
            .bind(&input.description)
            .bind(input.inclusions.as_ref().map(Json))
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a package. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
