//! Free-text search clause construction.
//!
//! Every list endpoint matches its search term as a substring of two or three
//! text columns, OR-ed together. Whether the comparison is case-sensitive is
//! a deployment setting.

/// How a search term is compared against column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl SearchMode {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            SearchMode::CaseSensitive
        } else {
            SearchMode::CaseInsensitive
        }
    }

    /// SQL predicate that is true when the bound parameter `?{param}` is NULL
    /// or occurs in any of `columns`.
    ///
    /// `instr` is used instead of `LIKE` so `%` and `_` in user input match
    /// literally.
    pub(crate) fn clause(self, param: usize, columns: &[&str]) -> String {
        let matches: Vec<String> = columns
            .iter()
            .map(|col| match self {
                SearchMode::CaseSensitive => format!("instr({col}, ?{param}) > 0"),
                SearchMode::CaseInsensitive => {
                    format!("instr(lower({col}), lower(?{param})) > 0")
                }
            })
            .collect();
        format!("(?{param} IS NULL OR {})", matches.join(" OR "))
    }
}

/// A search term plus the comparison mode to apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSearch<'a> {
    /// `None` disables the filter.
    pub term: Option<&'a str>,
    pub mode: SearchMode,
}

impl<'a> TextSearch<'a> {
    pub fn new(term: Option<&'a str>, mode: SearchMode) -> Self {
        Self { term, mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sensitive_clause() {
        assert_eq!(
            SearchMode::CaseSensitive.clause(1, &["title", "content"]),
            "(?1 IS NULL OR instr(title, ?1) > 0 OR instr(content, ?1) > 0)"
        );
    }

    #[test]
    fn case_insensitive_clause_lowers_both_sides() {
        assert_eq!(
            SearchMode::CaseInsensitive.clause(2, &["name"]),
            "(?2 IS NULL OR instr(lower(name), lower(?2)) > 0)"
        );
    }

    #[test]
    fn default_mode_is_case_sensitive() {
        assert_eq!(SearchMode::default(), SearchMode::CaseSensitive);
        assert_eq!(SearchMode::from_case_sensitive(false), SearchMode::CaseInsensitive);
    }
}
