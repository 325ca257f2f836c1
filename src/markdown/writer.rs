//! Markdown emission primitives.
//!
//! A [`MarkdownWriter`] accumulates the output document in memory. Paragraph
//! text arrives already inline-rendered; the writer only normalizes
//! whitespace, wraps, and manages blank-line separation between blocks.
//! Preformatted content bypasses all of that and is written verbatim.

use crate::markdown::wrap::{fill, fill_prefixed, normalize_ws};

/// Default wrap column, matching the published documents.
pub const DEFAULT_WIDTH: usize = 72;

/// Accumulates Markdown text for one emission pass.
#[derive(Debug)]
pub struct MarkdownWriter {
    out: String,
    width: usize,
}

impl MarkdownWriter {
    /// Create a writer wrapping at `width` columns (0 disables wrapping).
    pub fn new(width: usize) -> Self {
        MarkdownWriter {
            out: String::new(),
            width,
        }
    }

    /// Write text exactly as given (front matter, preamble).
    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Write one normalized, wrapped line.
    pub fn line(&mut self, text: &str) {
        self.out.push_str(&fill(text, self.width));
        self.out.push('\n');
    }

    /// Write one normalized line without wrapping (table rows).
    pub fn long_line(&mut self, text: &str) {
        self.out.push_str(&normalize_ws(text));
        self.out.push('\n');
    }

    /// Blank separator line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write a wrapped paragraph followed by a blank line.
    pub fn para(&mut self, text: &str) {
        self.line(text);
        self.blank();
    }

    /// Write a paragraph whose first line opens with `prefix` (kept
    /// verbatim, counted against the wrap width), followed by a blank line.
    pub fn prefixed_para(&mut self, prefix: &str, text: &str) {
        self.out.push_str(&fill_prefixed(prefix, text, self.width));
        self.out.push('\n');
        self.blank();
    }

    /// Write a fenced code block with verbatim content. Every line of the
    /// block, fences included, carries the inherited `prefix`.
    pub fn example(&mut self, text: &str, prefix: &str) {
        self.out.push_str(prefix);
        self.out.push_str("```\n");
        for line in text.trim().lines() {
            self.out.push_str(prefix);
            self.out.push_str(line);
            self.out.push('\n');
        }
        self.out.push_str(prefix);
        self.out.push_str("```\n");
        self.blank();
    }

    /// Consume the writer and return the accumulated document.
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_para_spacing() {
        let mut w = MarkdownWriter::new(72);
        w.para("First paragraph.");
        w.para("Second paragraph.");
        assert_eq!(w.finish(), "First paragraph.\n\nSecond paragraph.\n\n");
    }

    #[test]
    fn test_line_wraps() {
        let mut w = MarkdownWriter::new(10);
        w.line("aaaa bbbb cccc");
        assert_eq!(w.finish(), "aaaa bbbb\ncccc\n");
    }

    #[test]
    fn test_long_line_never_wraps() {
        let mut w = MarkdownWriter::new(10);
        w.long_line("| a | b | c | d | e |");
        assert_eq!(w.finish(), "| a | b | c | d | e |\n");
    }

    #[test]
    fn test_line_normalizes_whitespace() {
        let mut w = MarkdownWriter::new(72);
        w.line("  ##   3.   Heading  ");
        assert_eq!(w.finish(), "## 3. Heading\n");
    }

    #[test]
    fn test_prefixed_para() {
        let mut w = MarkdownWriter::new(72);
        w.prefixed_para("  * ", "item   text");
        assert_eq!(w.finish(), "  * item text\n\n");
    }

    #[test]
    fn test_example_fences_verbatim() {
        let mut w = MarkdownWriter::new(10);
        w.example("\nkeep    spacing\n  and indent\n", "");
        assert_eq!(w.finish(), "```\nkeep    spacing\n  and indent\n```\n\n");
    }

    #[test]
    fn test_example_with_prefix() {
        let mut w = MarkdownWriter::new(72);
        w.example("one\ntwo", "> ");
        assert_eq!(w.finish(), "> ```\n> one\n> two\n> ```\n\n");
    }

    #[test]
    fn test_raw_passthrough() {
        let mut w = MarkdownWriter::new(72);
        w.raw("---\n---\n");
        w.para("Body.");
        assert_eq!(w.finish(), "---\n---\nBody.\n\n");
    }
}
