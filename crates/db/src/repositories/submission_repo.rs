//! Repository for the `submissions` table (contact-form messages).

use chrono::Utc;
use divesite_core::pagination::{PageRequest, Paginated};
use divesite_core::types::new_id;

use crate::models::submission::{CreateSubmission, Submission};
use crate::search::TextSearch;
use crate::DbPool;

const COLUMNS: &str = "id, name, email, message, date, is_read";

const SEARCH_COLUMNS: &[&str] = &["name", "email", "message"];

pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Record a new unread submission dated now.
    pub async fn create(
        pool: &DbPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (id, name, email, message, date, is_read)
             VALUES (?1, ?2, ?3, ?4, ?5, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = ?1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions by date, newest first, filtered by search term and
    /// read flag.
    pub async fn list(
        pool: &DbPool,
        search: TextSearch<'_>,
        is_read: Option<bool>,
        page: PageRequest,
    ) -> Result<Paginated<Submission>, sqlx::Error> {
        let filter = search.mode.clause(1, SEARCH_COLUMNS);

        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE {filter} AND (?2 IS NULL OR is_read = ?2)
             ORDER BY date DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        let items = sqlx::query_as::<_, Submission>(&query)
            .bind(search.term)
            .bind(is_read)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM submissions WHERE {filter} AND (?2 IS NULL OR is_read = ?2)"
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(search.term)
            .bind(is_read)
            .fetch_one(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Set the read flag. Returns `None` if the submission does not exist.
    pub async fn set_read(
        pool: &DbPool,
        id: &str,
        is_read: bool,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET is_read = ?2
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
