//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `strip_tags()` - drop markup, keep text content

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Tag stripping
// =============================================================================

/// Remove every `<...>` tag, keeping the text between tags.
///
/// An unterminated `<` swallows the rest of the input, so a dangling
/// `<script` can never survive as text.
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    if !s.contains('<') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut inside_tag = false;
    for c in s.chars() {
        match c {
            '<' => inside_tag = true,
            '>' if inside_tag => inside_tag = false,
            _ if !inside_tag => result.push(c),
            _ => {}
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_no_allocation() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape("<b>"), Cow::Owned(_)));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>x</b>"), "x");
        assert_eq!(strip_tags("<p>Hello <em>World</em></p>"), "Hello World");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn test_strip_tags_unterminated() {
        assert_eq!(strip_tags("safe<script alert(1)"), "safe");
    }

    #[test]
    fn test_strip_tags_stray_closing_bracket() {
        assert_eq!(strip_tags("a > b <i>c</i>"), "a > b c");
    }
}
