//! Required-field checks shared by every create/update path.

use crate::error::CoreError;

/// Return the value when it is present and not blank.
///
/// Multipart and JSON bodies both deliver "not supplied" as either a missing
/// key or an empty string; callers treat the two the same way.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fail with [`CoreError::MissingFields`] naming every blank field.
pub fn require_fields(
    message: &str,
    fields: &[(&'static str, Option<&str>)],
) -> Result<(), CoreError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| non_blank(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingFields {
            message: message.to_string(),
            fields: missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("Daily Dive")), Some("Daily Dive"));
    }

    #[test]
    fn require_fields_passes_when_all_present() {
        let result = require_fields(
            "Title and price are required.",
            &[("title", Some("Daily Dive")), ("price", Some("IDR 1,500,000"))],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn require_fields_lists_every_missing_field() {
        let result = require_fields(
            "Title, status, and content are required.",
            &[("title", Some("")), ("status", Some("Draft")), ("content", None)],
        );
        assert_matches!(
            result,
            Err(CoreError::MissingFields { ref fields, .. }) if fields == &vec!["title", "content"]
        );
    }
}
