//! Text truncation for embed size ceilings
//!
//! All limits are counted in Unicode scalar values.

use std::borrow::Cow;

pub const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 2048;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const FIELD_COUNT_LIMIT: usize = 25;
pub const FOOTER_TEXT_LIMIT: usize = 2048;
pub const AUTHOR_NAME_LIMIT: usize = 256;
pub const CONTENT_LIMIT: usize = 2000;
pub const TOTAL_LIMIT: usize = 6000;

/// Appended to text that had to be cut
pub const ELLIPSIS: char = '…';

/// Byte offset of the `n`-th char, or the full length
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Cut to at most `max` chars without a marker
pub fn hard_truncate(text: &str, max: usize) -> &str {
    &text[..byte_offset(text, max)]
}

/// Cut to at most `max` chars, ending in [`ELLIPSIS`].
///
/// Prefers the last whitespace boundary when it sits in the second half of
/// the kept text; otherwise cuts mid-word. The output minus the marker is
/// always a prefix of the input.
pub fn truncate_text(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }

    let mut kept = hard_truncate(text, max - 1);
    if let Some(boundary) = kept.rfind(char::is_whitespace) {
        if boundary >= kept.len() / 2 {
            kept = &kept[..boundary];
        }
    }

    Cow::Owned(format!("{}{}", kept.trim_end(), ELLIPSIS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_borrowed() {
        assert!(matches!(truncate_text("hello", 10), Cow::Borrowed("hello")));
        assert_eq!(truncate_text("hello", 5), "hello");
    }

    #[test]
    fn test_cuts_at_word_boundary() {
        assert_eq!(truncate_text("this is a long text", 12), "this is a…");
    }

    #[test]
    fn test_cuts_mid_word_without_late_boundary() {
        assert_eq!(truncate_text("abcdefghijklmnop qr", 10), "abcdefghi…");
    }

    #[test]
    fn test_multibyte_text() {
        let text = "日本語のテキストです".repeat(10);
        let out = truncate_text(&text, 15);
        assert_eq!(out.chars().count(), 15);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncation_law() {
        let inputs = [
            "a ".repeat(3000),
            "x".repeat(5000),
            "word\n".repeat(700),
            "ü ß ".repeat(900),
        ];
        for input in &inputs {
            for cap in [1, 7, 100, DESCRIPTION_LIMIT] {
                let out = truncate_text(input, cap);
                assert!(out.chars().count() <= cap, "cap {cap} exceeded");
                let body = out.strip_suffix(ELLIPSIS).unwrap_or(&out);
                assert!(input.starts_with(body), "output is not a prefix");
            }
        }
    }

    #[test]
    fn test_hard_truncate() {
        assert_eq!(hard_truncate("abcdef", 3), "abc");
        assert_eq!(hard_truncate("ab", 3), "ab");
        assert_eq!(hard_truncate("äöü", 2), "äö");
    }
}
