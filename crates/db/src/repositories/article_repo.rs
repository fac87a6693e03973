//! Repository for the `articles` table.

use chrono::Utc;
use divesite_core::article::ArticleStatus;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::search::TextSearch;
use crate::DbPool;

/// Column list for articles queries.
const COLUMNS: &str =
    "id, title, status, date, content, featured_image, created_at, updated_at";

/// Columns matched by free-text search.
const SEARCH_COLUMNS: &[&str] = &["title", "content"];

/// Number of related articles shown next to a public article.
pub const RELATED_ARTICLE_LIMIT: i64 = 3;

/// Provides CRUD operations for blog articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article. `date` is set to today's date.
    pub async fn create(pool: &DbPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO articles (id, title, status, date, content, featured_image, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(input.status.as_str())
            .bind(now.date_naive())
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID regardless of status.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an article by ID only if it is published.
    pub async fn find_published(pool: &DbPool, id: &str) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?1 AND status = ?2");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(ArticleStatus::Published.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Up to [`RELATED_ARTICLE_LIMIT`] other published articles, newest first.
    pub async fn list_related_published(
        pool: &DbPool,
        exclude_id: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE status = ?1 AND id <> ?2
             ORDER BY created_at DESC, id DESC
             LIMIT ?3"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(ArticleStatus::Published.as_str())
            .bind(exclude_id)
            .bind(RELATED_ARTICLE_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// List articles newest-first, filtered by search term and status.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        status: Option<ArticleStatus>,
        page: PageRequest,
    ) -> Result<Paginated<Article>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);
        let status = status.map(ArticleStatus::as_str);

        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE {filter} AND (?2 IS NULL OR status = ?2)
             ORDER BY created_at DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        let items = sqlx::query_as::<_, Article>(&query)
            .bind(search.term)
            .bind(status)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM articles WHERE {filter} AND (?2 IS NULL OR status = ?2)"
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .bind(status)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Update an article. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE(?2, title),
                status = COALESCE(?3, status),
                content = COALESCE(?4, content),
                featured_image = COALESCE(?5, featured_image),
                updated_at = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.status.map(ArticleStatus::as_str))
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
