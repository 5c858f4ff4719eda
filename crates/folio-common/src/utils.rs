//! Shared utility functions.

/// Strips the leading `#` from a location fragment, returning `None` when empty.
pub fn parse_fragment(hash: &str) -> Option<String> {
    let trimmed = hash.strip_prefix('#').unwrap_or(hash).trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns the non-empty remainder of `id` after `prefix` (`lang-es` -> `es`).
pub fn suffix_after<'a>(id: &'a str, prefix: &str) -> Option<&'a str> {
    id.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

/// Returns `Some(text)` only when the text is non-empty.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        assert_eq!(parse_fragment("#contact"), Some("contact".to_string()));
        assert_eq!(parse_fragment("contact"), Some("contact".to_string()));
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn test_suffix_after() {
        assert_eq!(suffix_after("lang-es", "lang-"), Some("es"));
        assert_eq!(suffix_after("lang-", "lang-"), None);
        assert_eq!(suffix_after("nav-es", "lang-"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
