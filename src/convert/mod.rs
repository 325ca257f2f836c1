//! Conversion driver: two passes over the parsed document tree.
//!
//! The collect pass walks the whole document with an empty anchor table,
//! discarding its output; its job is to validate structure and record every
//! section anchor and definition term. The emit pass repeats the walk with
//! the tables complete, so references to targets that appear later in
//! document order resolve. A reference that is still missing on the emit
//! pass is a hard error.
//!
//! Both passes share one code path. On a document with no forward
//! references the two passes produce identical output.

mod numbering;
mod walker;

use std::collections::HashMap;

use crate::dom::Element;
use crate::error::{Error, Result};
use crate::markdown::DEFAULT_WIDTH;
use crate::refs::ReferenceTable;

use numbering::Phase;
use walker::Pass;

/// Conversion settings.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Markdown text inserted verbatim between the front matter and the
    /// first section (typically a title block).
    pub preamble: Option<String>,
    /// Wrap column for paragraph text; 0 disables wrapping.
    pub width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            preamble: None,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Anchor and definition tables built by the collect pass and read by both.
#[derive(Debug, Default)]
pub(crate) struct ResolutionTables {
    /// Section anchor to its numbered heading text.
    pub(crate) sections: HashMap<String, String>,
    /// Normalized lowercase term to its definition anchor.
    pub(crate) definitions: HashMap<String, String>,
}

/// Convert a parsed document to kramdown Markdown.
///
/// `root` is the document element produced by [`crate::dom::parse_document`];
/// its `<body>` child holds the section tree. The reference table supplies
/// the display text for citation labels.
pub fn convert(root: &Element, refs: &ReferenceTable, options: &ConvertOptions) -> Result<String> {
    let body = root
        .find("body")
        .ok_or_else(|| Error::MissingElement("body".to_string()))?;
    let mut tables = ResolutionTables::default();
    run_pass(Phase::Collect, body, refs, &mut tables, options)?;
    run_pass(Phase::Emit, body, refs, &mut tables, options)
}

fn run_pass(
    phase: Phase,
    body: &Element,
    refs: &ReferenceTable,
    tables: &mut ResolutionTables,
    options: &ConvertOptions,
) -> Result<String> {
    let mut pass = Pass::new(phase, refs, tables, options.width);
    pass.writer().raw("---\n---\n");
    if let Some(preamble) = &options.preamble {
        pass.writer().raw(preamble);
    }
    for child in &body.children {
        if child.tag != "section" {
            return Err(Error::UnknownTag {
                tag: child.tag.clone(),
                position: "document body".to_string(),
            });
        }
        pass.section(child, 2)?;
    }
    pass.references()?;
    Ok(pass.into_output())
}
