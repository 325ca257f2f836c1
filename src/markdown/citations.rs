//! Citation markers and the citation collector.
//!
//! Running text cites bibliography entries with `[[label]]` markers, or
//! `[[!label]]` for normative citations. A dedicated lexical scan extracts
//! the markers as first-class tokens from plain text runs before any
//! whitespace normalization, so marker syntax is never rewritten by the
//! generic paragraph munging and never recognized inside code spans or
//! preformatted content.

use std::collections::{BTreeMap, BTreeSet};

use memchr::memmem;

use crate::error::{Error, Result};
use crate::markdown::slugify::ref_anchor;
use crate::refs::ReferenceTable;

/// One lexical token of a plain text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken<'a> {
    /// Literal text, passed through untouched.
    Text(&'a str),
    /// A `[[label]]` / `[[!label]]` citation marker.
    Citation { label: &'a str, normative: bool },
}

/// Split a text run into literal text and citation markers.
///
/// A marker is `[[`, an optional `!`, a non-empty label without whitespace,
/// then `]]`. Anything that does not match stays literal text.
///
/// # Examples
///
/// ```
/// use specmd::markdown::{scan_citations, InlineToken};
///
/// let tokens = scan_citations("see [[!RFC2119]].");
/// assert_eq!(
///     tokens,
///     vec![
///         InlineToken::Text("see "),
///         InlineToken::Citation { label: "RFC2119", normative: true },
///         InlineToken::Text("."),
///     ]
/// );
/// ```
pub fn scan_citations(text: &str) -> Vec<InlineToken<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = 0;
    let mut search = 0;

    while let Some(rel) = memmem::find(&bytes[search..], b"[[") {
        let start = search + rel;
        let mut label_start = start + 2;
        let mut normative = false;
        if bytes.get(label_start) == Some(&b'!') {
            normative = true;
            label_start += 1;
        }
        match memmem::find(&bytes[label_start..], b"]]") {
            Some(len) if len > 0 => {
                let label = &text[label_start..label_start + len];
                if label.contains(char::is_whitespace) {
                    search = start + 2;
                    continue;
                }
                if cursor < start {
                    tokens.push(InlineToken::Text(&text[cursor..start]));
                }
                tokens.push(InlineToken::Citation { label, normative });
                cursor = label_start + len + 2;
                search = cursor;
            }
            _ => search = start + 2,
        }
    }

    if cursor < text.len() {
        tokens.push(InlineToken::Text(&text[cursor..]));
    }
    tokens
}

/// Accumulates the citations actually referenced during one emission pass.
///
/// Labels are validated against the [`ReferenceTable`]; every resolved label
/// is recorded together with its generated `ref-` anchor so the trailing
/// references section can link back to the bibliography.
#[derive(Debug, Default)]
pub struct Citations {
    used: BTreeMap<String, String>,
    normative: BTreeSet<String>,
}

impl Citations {
    pub fn new() -> Self {
        Citations::default()
    }

    /// Resolve one citation label into a bracketed Markdown link,
    /// registering it as used (and normative if flagged).
    pub fn link(
        &mut self,
        table: &ReferenceTable,
        label: &str,
        normative: bool,
    ) -> Result<String> {
        if !table.contains(label) {
            return Err(Error::UnknownCitation(label.to_string()));
        }
        if normative {
            self.normative.insert(label.to_string());
        }
        let anchor = ref_anchor(label);
        let link = format!("\\[[{label}](#{anchor})\\]");
        self.used.insert(label.to_string(), anchor);
        Ok(link)
    }

    /// Replace every citation marker in `text` with its resolved link.
    pub fn expand(&mut self, table: &ReferenceTable, text: &str) -> Result<String> {
        let tokens = scan_citations(text);
        let mut out = String::with_capacity(text.len());
        for token in tokens {
            match token {
                InlineToken::Text(t) => out.push_str(t),
                InlineToken::Citation { label, normative } => {
                    out.push_str(&self.link(table, label, normative)?);
                }
            }
        }
        Ok(out)
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Used labels with their anchors in lexicographic order, split into
    /// (normative, informative).
    pub fn partition(&self) -> (Vec<(&str, &str)>, Vec<(&str, &str)>) {
        let mut normative = Vec::new();
        let mut informative = Vec::new();
        for (label, anchor) in &self.used {
            let entry = (label.as_str(), anchor.as_str());
            if self.normative.contains(label) {
                normative.push(entry);
            } else {
                informative.push(entry);
            }
        }
        (normative, informative)
    }
}
