//! Shared query parameter types for list endpoints.

use divesite_core::article::ArticleStatus;
use divesite_core::pagination::PageRequest;
use serde::Deserialize;

use crate::error::AppResult;

/// `?search=&page=&limit=` plus the entity-specific filters.
///
/// Each list handler reads only the filters that apply to its entity.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Articles: `Draft` / `Published`. `All` or empty means no filter.
    pub status: Option<String>,
    /// Gallery images: exact category name.
    pub category: Option<String>,
    /// Testimonials.
    pub is_featured: Option<bool>,
    /// Submissions.
    pub is_read: Option<bool>,
}

impl ListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Parsed article status filter.
    pub fn article_status(&self) -> AppResult<Option<ArticleStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
            Some(s) => Ok(Some(s.parse()?)),
        }
    }

    /// Category filter, `None` when absent or blank.
    pub fn category(&self) -> Option<&str> {
        divesite_core::validation::non_blank(self.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_accepts_all_and_blank() {
        let mut params = ListParams::default();
        assert_eq!(params.article_status().unwrap(), None);
        params.status = Some("All".into());
        assert_eq!(params.article_status().unwrap(), None);
        params.status = Some("Published".into());
        assert_eq!(params.article_status().unwrap(), Some(ArticleStatus::Published));
        params.status = Some("Archived".into());
        assert!(params.article_status().is_err());
    }

    #[test]
    fn page_request_applies_defaults() {
        let params = ListParams {
            page: Some(2),
            ..Default::default()
        };
        let req = params.page_request();
        assert_eq!((req.page, req.limit), (2, 10));
    }
}
