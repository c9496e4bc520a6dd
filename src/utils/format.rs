//! Formatting and input-guard helpers for display values.

use crate::config::SNIPPET_MAX_CHARS;

/// Truncate a source snippet to its first [`SNIPPET_MAX_CHARS`] characters
/// and append an ellipsis.
///
/// The ellipsis is appended unconditionally, even when the content is already
/// short, and truncation ignores sentence boundaries. Counts `char`s, so
/// multi-byte content never splits mid-character.
pub fn truncate_snippet(content: &str) -> String {
    let prefix: String = content.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{prefix}...")
}

/// Check whether a form field is empty or whitespace-only.
///
/// Shared submit guard: a blank field means no request is sent at all.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_long_content_to_prefix() {
        let content = "A".repeat(300);
        let snippet = truncate_snippet(&content);
        assert_eq!(snippet.len(), 203);
        assert!(snippet.starts_with(&"A".repeat(200)));
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_short_content_still_gets_ellipsis() {
        assert_eq!(truncate_snippet("short"), "short...");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let content = "é".repeat(250);
        let snippet = truncate_snippet(&content);
        assert_eq!(snippet.chars().count(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank("Science"));
        assert!(!is_blank("  x  "));
    }
}
