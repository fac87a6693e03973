//! Dive package rules.

/// Turn newline-separated inclusions text into an ordered list.
///
/// Blank (whitespace-only) lines are dropped and Windows line endings are
/// tolerated; the remaining lines keep their order and content.
pub fn parse_inclusions(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_in_order() {
        assert_eq!(
            parse_inclusions("2x Dives\nFull Equipment"),
            vec!["2x Dives", "Full Equipment"]
        );
    }

    #[test]
    fn drops_blank_lines() {
        assert_eq!(parse_inclusions("2x Dives\n\nGuide\n"), vec!["2x Dives", "Guide"]);
        assert_eq!(parse_inclusions("  \n\t\n"), Vec::<String>::new());
    }

    #[test]
    fn tolerates_crlf() {
        assert_eq!(parse_inclusions("Lunch\r\nTransport\r\n"), vec!["Lunch", "Transport"]);
    }
}
