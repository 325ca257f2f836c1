//! Whitespace normalization and word wrapping.
//!
//! Paragraph text is collapsed to single spaces and wrapped at a fixed
//! column width. Words are never split and hyphens are not treated as break
//! points, so a word longer than the width overflows its line.

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// # Examples
///
/// ```
/// use specmd::markdown::normalize_ws;
///
/// assert_eq!(normalize_ws("  a\n  b\tc "), "a b c");
/// ```
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and greedily wrap `text` at `width` columns.
///
/// A width of 0 disables wrapping and yields a single normalized line.
///
/// # Examples
///
/// ```
/// use specmd::markdown::fill;
///
/// assert_eq!(fill("one two three", 7), "one two\nthree");
/// assert_eq!(fill("one  two", 0), "one two");
/// ```
pub fn fill(text: &str, width: usize) -> String {
    fill_prefixed("", text, width)
}

/// Like [`fill`], but the first line starts with `prefix`, which counts
/// against the width. Continuation lines are not indented; Markdown's lazy
/// continuation keeps them attached to the block the prefix opened.
pub fn fill_prefixed(prefix: &str, text: &str, width: usize) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len());
    out.push_str(prefix);
    let mut line_len = prefix.chars().count();
    let mut first = true;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if first {
            out.push_str(word);
            line_len += word_len;
            first = false;
        } else if width > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            out.push_str(word);
            line_len = word_len;
        } else {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word_len;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("a  b"), "a b");
        assert_eq!(normalize_ws("\n a \n b \n"), "a b");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn test_fill_basic() {
        assert_eq!(fill("aa bb cc dd", 5), "aa bb\ncc dd");
    }

    #[test]
    fn test_fill_exact_width() {
        assert_eq!(fill("aa bb", 5), "aa bb");
        assert_eq!(fill("aa bbb", 5), "aa\nbbb");
    }

    #[test]
    fn test_fill_long_word_overflows() {
        assert_eq!(fill("a verylongword b", 6), "a\nverylongword\nb");
        assert_eq!(fill("verylongword", 6), "verylongword");
    }

    #[test]
    fn test_fill_never_breaks_hyphens() {
        assert_eq!(fill("self-describing text", 10), "self-describing\ntext");
    }

    #[test]
    fn test_fill_collapses_whitespace() {
        assert_eq!(fill("a   b\n\nc", 72), "a b c");
    }

    #[test]
    fn test_fill_zero_width() {
        assert_eq!(fill("a b c d e f", 0), "a b c d e f");
    }

    #[test]
    fn test_fill_empty() {
        assert_eq!(fill("", 72), "");
        assert_eq!(fill("   ", 72), "");
    }

    #[test]
    fn test_fill_prefixed() {
        assert_eq!(fill_prefixed("  * ", "item text", 72), "  * item text");
        assert_eq!(fill_prefixed("> ", "quoted", 72), "> quoted");
    }

    #[test]
    fn test_fill_prefixed_counts_prefix() {
        // "  * " is 4 columns, so only one 3-char word fits at width 8.
        assert_eq!(fill_prefixed("  * ", "aaa bbb", 8), "  * aaa\nbbb");
    }

    #[test]
    fn test_fill_prefixed_empty_text() {
        assert_eq!(fill_prefixed("> ", "", 72), "> ");
    }

    proptest! {
        #[test]
        fn prop_fill_preserves_words(text in "\\PC*", width in 1usize..120) {
            let wrapped = fill(&text, width);
            let original: Vec<&str> = text.split_whitespace().collect();
            let rewrapped: Vec<&str> = wrapped.split_whitespace().collect();
            prop_assert_eq!(original, rewrapped);
        }

        #[test]
        fn prop_fill_respects_width_or_single_word(text in "\\PC*", width in 1usize..120) {
            for line in fill(&text, width).lines() {
                prop_assert!(
                    line.chars().count() <= width || !line.contains(' '),
                    "overlong line with spaces: {:?}",
                    line
                );
            }
        }

        #[test]
        fn prop_fill_prefixed_keeps_prefix(text in "\\PC*") {
            let out = fill_prefixed("  * ", &text, 72);
            prop_assert!(out.starts_with("  * "));
        }
    }
}
