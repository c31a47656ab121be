use std::borrow::Cow;

/// Removes every `\r` and `\n` from `text`.
pub fn strip_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains(['\r', '\n']) {
        Cow::Owned(text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Byte columns `[start, end)` of a fixed-width line, clamped to its length.
///
/// A range that would split a multi-byte character yields `""`, which then
/// fails numeric parsing like any other malformed column.
pub fn column(text: &str, start: usize, end: usize) -> &str {
    let end = end.min(text.len());
    let start = start.min(end);
    text.get(start..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_line_breaks_removes_cr_and_lf_anywhere() {
        assert_eq!(strip_line_breaks("abc\r\n"), "abc");
        assert_eq!(strip_line_breaks("a\rb"), "ab");
        assert!(matches!(strip_line_breaks("clean"), Cow::Borrowed("clean")));
    }

    #[test]
    fn column_clamps_to_line_length() {
        assert_eq!(column("  1  2  1", 0, 3), "  1");
        assert_eq!(column("  1  2  1", 6, 9), "  1");
        assert_eq!(column("  1", 3, 6), "");
        assert_eq!(column("  1  2", 3, 9), "  2");
    }

    #[test]
    fn column_rejects_split_characters() {
        assert_eq!(column("αβγ", 0, 3), "");
    }
}
