//! # specmd
//!
//! Convert ReSpec-style HTML specifications into linear kramdown Markdown.
//!
//! ## Features
//!
//! - Two-pass conversion, so links to sections and definitions that appear
//!   later in the document resolve
//! - Stable section numbering with kramdown anchor attributes on every
//!   heading
//! - `[[label]]` and `[[!label]]` citations collected into a generated
//!   References section, split into normative and informative entries
//! - Strict structural validation: unknown tags, duplicate anchors, and
//!   dangling references are errors, not silent omissions
//!
//! ## Quick Start
//!
//! ```no_run
//! use specmd::{ConvertOptions, ReferenceTable, convert, parse_document};
//!
//! let source = std::fs::read_to_string("index.html").unwrap();
//! let root = parse_document(&source).unwrap();
//! let refs = ReferenceTable::load("references.json").unwrap();
//! let markdown = convert(&root, &refs, &ConvertOptions::default()).unwrap();
//! std::fs::write("index.md", markdown).unwrap();
//! ```
//!
//! ## Document Shape
//!
//! The input is an `<html>` document whose `<body>` is a tree of nested
//! `<section>` elements. Each section opens with an `<h2>`/`<h3>` heading
//! and contains paragraphs, lists, tables, definition lists, blockquotes,
//! and preformatted examples:
//!
//! ```
//! use specmd::{ConvertOptions, ReferenceTable, convert, parse_document};
//!
//! let root = parse_document(
//!     r#"<html><body>
//!         <section id="intro"><h2>Introduction</h2><p>Hello.</p></section>
//!     </body></html>"#,
//! )
//! .unwrap();
//! let refs = ReferenceTable::default();
//! let markdown = convert(&root, &refs, &ConvertOptions::default()).unwrap();
//! assert!(markdown.contains("## Introduction"));
//! ```

pub mod convert;
pub mod dom;
pub mod error;
pub mod markdown;
pub mod refs;

pub use convert::{ConvertOptions, convert};
pub use dom::{Element, parse_document};
pub use error::{Error, Result};
pub use refs::ReferenceTable;
