//! Pure Markdown generation utilities.
//!
//! This module holds the text-level machinery the converter emits through.
//! The design separates pure string work from tree traversal:
//!
//! - `slugify`: anchor generation for headings, definitions, and citations
//! - `wrap`: whitespace normalization and fixed-width word wrapping
//! - `citations`: citation-marker scanning and the per-pass collector
//! - `writer`: the accumulating Markdown writer
//!
//! The conversion layer ([`crate::convert`]) walks the document tree and
//! calls into these, so everything here is testable without a document.
//!
//! ## Design Notes
//!
//! - **No generic escaping**: the source vocabulary is closed and authors
//!   write Markdown-safe prose, so text passes through unescaped; only
//!   whitespace is normalized. Preformatted content is copied verbatim.
//! - **Citation markers are lexed, not regexed**: `[[label]]` tokens are
//!   extracted from plain text runs before normalization, so marker syntax
//!   is never recognized inside code spans or preformatted blocks.
//! - **Wrapping never splits words**: long tokens (URLs, digests) overflow
//!   their line instead, matching the published documents.

mod citations;
mod slugify;
mod wrap;
mod writer;

pub use citations::{Citations, InlineToken, scan_citations};
pub use slugify::{dfn_anchor, ref_anchor, slugify};
pub use wrap::{fill, fill_prefixed, normalize_ws};
pub use writer::{DEFAULT_WIDTH, MarkdownWriter};
