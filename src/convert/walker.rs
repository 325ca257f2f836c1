//! The section walker: recursive section traversal, block dispatch, and
//! inline rendering for one pass.
//!
//! Dispatch is closed: every tag outside the fixed vocabulary is a
//! structural error, at block, inline, and list-item positions alike. The
//! walker consults the resolution tables built during the collect pass, so
//! link targets defined later in document order resolve on the emit pass.

use crate::convert::ResolutionTables;
use crate::convert::numbering::{Phase, RunState};
use crate::dom::Element;
use crate::error::{Error, Result};
use crate::markdown::{Citations, MarkdownWriter, dfn_anchor, normalize_ws, slugify};
use crate::refs::ReferenceTable;

/// Link text substituted for a not-yet-known target on the collect pass.
/// Collect output is discarded, so the value never reaches a reader.
const UNRESOLVED_LINK_TEXT: &str = "unresolved";

const NON_NORMATIVE_NOTE: &str = "As well as sections marked as non-normative, all authoring \
     guidelines, diagrams, examples, and notes in this specification are non-normative. \
     Everything else in this specification is normative.";

/// One traversal of the document tree.
///
/// Owns the pass-local state (run state, writer, citation collector) and
/// borrows the cross-pass resolution tables.
pub(crate) struct Pass<'a> {
    state: RunState,
    refs: &'a ReferenceTable,
    tables: &'a mut ResolutionTables,
    citations: Citations,
    writer: MarkdownWriter,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(
        phase: Phase,
        refs: &'a ReferenceTable,
        tables: &'a mut ResolutionTables,
        width: usize,
    ) -> Self {
        Pass {
            state: RunState::new(phase),
            refs,
            tables,
            citations: Citations::new(),
            writer: MarkdownWriter::new(width),
        }
    }

    pub(crate) fn writer(&mut self) -> &mut MarkdownWriter {
        &mut self.writer
    }

    pub(crate) fn into_output(self) -> String {
        self.writer.finish()
    }

    /// Walk one section element at the given nesting level.
    pub(crate) fn section(&mut self, element: &Element, level: usize) -> Result<()> {
        let number = self.state.next_number(level);
        match element.id() {
            Some("sotd") => return self.status_section(),
            Some("conformance") => return self.conformance_section(&number, level),
            _ => {}
        }
        let anchor = element.id().map(str::to_string);

        for child in &element.children {
            match child.tag.as_str() {
                "section" => self.section(child, level + 1)?,
                "h1" | "h2" | "h3" => {
                    let text = child.text.as_deref().unwrap_or("");
                    let in_toc = self.state.numbering_started();
                    self.heading(text, &number, anchor.as_deref(), in_toc, level)?;
                    ensure_blank_tail(child)?;
                }
                "p" => self.paragraph(child, "")?,
                "pre" => self.preformatted(child, "")?,
                "ul" => {
                    for item in &child.children {
                        expect_list_item(item, "unordered list")?;
                        self.paragraph(item, "  * ")?;
                    }
                }
                "ol" => {
                    for (n, item) in child.children.iter().enumerate() {
                        expect_list_item(item, "ordered list")?;
                        self.paragraph(item, &format!("  {}. ", n + 1))?;
                    }
                }
                "dl" => self.definition_list(child)?,
                "table" => self.table(child)?,
                "blockquote" => self.blockquote(child)?,
                other => {
                    return Err(Error::UnknownTag {
                        tag: other.to_string(),
                        position: format!("section at level {level}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// The status section switches numbering on and is replaced by a
    /// Table of Contents placeholder; its own content is dropped.
    fn status_section(&mut self) -> Result<()> {
        self.state.start_numbering();
        self.heading("Table of Contents", "", None, false, 2)?;
        self.writer.line("* TOC placeholder (required by kramdown)");
        self.writer.para("{:toc}");
        Ok(())
    }

    /// The conformance section is replaced wholesale with fixed boilerplate
    /// plus a normative citation of the keyword-interpretation reference.
    fn conformance_section(&mut self, number: &str, level: usize) -> Result<()> {
        self.heading("Conformance", number, None, true, level)?;
        self.writer.para(NON_NORMATIVE_NOTE);
        let rfc = self.citations.link(self.refs, "RFC2119", true)?;
        self.writer.para(&format!(
            "The key words <span class=\"rfc2119\">MAY</span>, \
             <span class=\"rfc2119\">MUST</span>, <span class=\"rfc2119\">MUST NOT</span>, \
             <span class=\"rfc2119\">SHOULD</span>, and <span class=\"rfc2119\">SHOULD NOT</span> \
             are to be interpreted as described in {rfc}."
        ));
        Ok(())
    }

    /// Emit a heading plus its kramdown anchor line, recording the anchor
    /// during the collect pass.
    fn heading(
        &mut self,
        text: &str,
        number: &str,
        explicit_anchor: Option<&str>,
        in_toc: bool,
        level: usize,
    ) -> Result<()> {
        let heading = format!("{number}{text}");
        let anchor = match explicit_anchor {
            Some(a) => a.to_string(),
            None => slugify(text),
        };
        if self.state.is_collect() {
            if self.tables.sections.contains_key(&anchor) {
                return Err(Error::DuplicateAnchor(anchor));
            }
            self.tables.sections.insert(anchor.clone(), heading.clone());
        }
        self.writer
            .line(&format!("{} {heading}", "#".repeat(level)));
        if in_toc {
            self.writer.para(&format!("{{: #{anchor}}}"));
        } else {
            self.writer.para(&format!("{{:.no_toc #{anchor}}}"));
        }
        Ok(())
    }

    fn paragraph(&mut self, element: &Element, prefix: &str) -> Result<()> {
        let text = self.inline(element, prefix)?;
        if prefix.is_empty() {
            self.writer.para(&text);
        } else {
            self.writer.prefixed_para(prefix, &text);
        }
        Ok(())
    }

    fn preformatted(&mut self, element: &Element, prefix: &str) -> Result<()> {
        self.writer
            .example(element.text.as_deref().unwrap_or(""), prefix);
        ensure_blank_tail(element)
    }

    fn definition_list(&mut self, element: &Element) -> Result<()> {
        let mut term = String::from("MISSING");
        for item in &element.children {
            match item.tag.as_str() {
                "dt" => {
                    // The term text lives in a nested <dfn>.
                    let text = match item.children.last() {
                        Some(dfn) => dfn.text.as_deref(),
                        None => item.text.as_deref(),
                    };
                    term = normalize_ws(text.unwrap_or(""));
                }
                "dd" => {
                    let anchor = dfn_anchor(&term);
                    if self.state.is_collect() {
                        self.tables
                            .definitions
                            .insert(term.to_lowercase(), anchor.clone());
                    }
                    let prefix = format!("  * <a name=\"{anchor}\"/>**{term}:** ");
                    self.paragraph(item, &prefix)?;
                }
                other => {
                    return Err(Error::UnknownTag {
                        tag: other.to_string(),
                        position: "definition list".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Rows are emitted in document order across the row groups; the
    /// separator is synthesized from the first row's cell count.
    fn table(&mut self, element: &Element) -> Result<()> {
        let mut header_cols: Option<usize> = None;
        for group in &element.children {
            for row in &group.children {
                let mut row_text = String::from("| ");
                let mut cols = 0;
                for cell in &row.children {
                    cols += 1;
                    row_text.push_str(&self.inline(cell, "")?);
                    row_text.push_str(" | ");
                }
                self.writer.long_line(&row_text);
                if header_cols.is_none() {
                    header_cols = Some(cols);
                    let separator = format!("| {}", "--- | ".repeat(cols));
                    self.writer.long_line(&separator);
                }
            }
        }
        self.writer.blank();
        Ok(())
    }

    fn blockquote(&mut self, element: &Element) -> Result<()> {
        for child in &element.children {
            match child.tag.as_str() {
                "p" => self.paragraph(child, "> ")?,
                "pre" => self.preformatted(child, "> ")?,
                other => {
                    return Err(Error::UnknownTag {
                        tag: other.to_string(),
                        position: "blockquote".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Render a node's mixed text/element content into a Markdown string.
    /// Nested preformatted blocks flush straight to the writer with the
    /// inherited prefix.
    fn inline(&mut self, element: &Element, prefix: &str) -> Result<String> {
        let mut out = String::new();
        if let Some(text) = &element.text {
            out.push_str(&self.plain_text(text)?);
        }
        for child in &element.children {
            let text = child.text.as_deref().map(str::trim);
            match child.tag.as_str() {
                "a" => out.push_str(&self.link(child, text)?),
                "code" => {
                    out.push('`');
                    out.push_str(text.unwrap_or(""));
                    out.push('`');
                }
                "span" => {
                    let Some(id) = child.id() else {
                        return Err(Error::UnknownTag {
                            tag: "span".to_string(),
                            position: "inline content (no id attribute)".to_string(),
                        });
                    };
                    out.push_str(&format!(
                        " <span id=\"{id}\" class=\"rfc2119\">{}</span>",
                        text.unwrap_or("")
                    ));
                }
                "i" | "em" => {
                    out.push('_');
                    out.push_str(text.unwrap_or(""));
                    out.push('_');
                }
                "pre" => self.preformatted(child, prefix)?,
                other => {
                    return Err(Error::UnknownTag {
                        tag: other.to_string(),
                        position: "inline content".to_string(),
                    });
                }
            }
            if let Some(tail) = &child.tail
                && !tail.trim().is_empty()
            {
                out.push_str(&self.plain_text(tail)?);
            }
        }
        if let Some(tail) = &element.tail
            && !tail.trim().is_empty()
        {
            out.push_str(&self.plain_text(tail)?);
        }
        Ok(out)
    }

    /// Resolve a link element.
    ///
    /// With visible text and an href this is a plain Markdown link. With no
    /// text, the href fragment names a section anchor whose numbered heading
    /// becomes the text. With no href, the text names a definition.
    fn link(&mut self, child: &Element, text: Option<&str>) -> Result<String> {
        match child.attr("href") {
            Some(href) => {
                let text = match text {
                    Some(t) => t.to_string(),
                    None => {
                        let anchor = href.trim_start_matches('#');
                        match self.tables.sections.get(anchor) {
                            Some(heading) => heading.clone(),
                            None if self.state.is_collect() => UNRESOLVED_LINK_TEXT.to_string(),
                            None => {
                                return Err(Error::UnresolvedReference(format!(
                                    "no section heading for anchor {anchor}"
                                )));
                            }
                        }
                    }
                };
                Ok(format!("[{text}]({href})"))
            }
            None => {
                let Some(term) = text else {
                    return Err(Error::UnresolvedReference(
                        "definition reference with no text".to_string(),
                    ));
                };
                let key = normalize_ws(term).to_lowercase();
                let anchor = match self.tables.definitions.get(&key) {
                    Some(a) => a.clone(),
                    None if self.state.is_collect() => term.to_string(),
                    None => {
                        return Err(Error::UnresolvedReference(format!(
                            "no definition for term {term}"
                        )));
                    }
                };
                Ok(format!("[{term}](#{anchor})"))
            }
        }
    }

    /// Plain text runs pass through the citation scan.
    fn plain_text(&mut self, text: &str) -> Result<String> {
        self.citations.expand(self.refs, text)
    }

    /// Append the references section: a numbered heading plus the
    /// normative/informative partitions of the citations collected during
    /// this pass.
    pub(crate) fn references(&mut self) -> Result<()> {
        let number = self.state.next_number(2);
        let heading = format!("{number}References");
        if self.state.is_collect() {
            self.tables
                .sections
                .insert("references".to_string(), heading.clone());
        }
        self.writer.line(&format!("## {heading}"));
        self.writer.para("{: #references}");

        let prefix = number.trim_end().to_string();
        let refs = self.refs;
        let render = |items: Vec<(&str, &str)>| -> Vec<String> {
            items
                .into_iter()
                .map(|(label, anchor)| {
                    let display = refs.get(label).unwrap_or("");
                    format!("<span id=\"{anchor}\"/>**\\[{label}]** {display}")
                })
                .collect()
        };
        let (normative, informative) = self.citations.partition();
        let mut subsections: Vec<(&str, &str, Vec<String>)> = Vec::new();
        if !normative.is_empty() {
            subsections.push((
                "Normative References",
                "normative-references",
                render(normative),
            ));
        }
        if !informative.is_empty() {
            subsections.push((
                "Informative References",
                "informative-references",
                render(informative),
            ));
        }

        for (index, (title, anchor, entries)) in subsections.into_iter().enumerate() {
            self.writer
                .line(&format!("### {prefix}{} {title}", index + 1));
            self.writer.para(&format!("{{: #{anchor}}}"));
            for entry in entries {
                self.writer.para(&entry);
            }
        }
        Ok(())
    }
}

fn expect_list_item(item: &Element, position: &str) -> Result<()> {
    if item.tag != "li" {
        return Err(Error::UnknownTag {
            tag: item.tag.clone(),
            position: position.to_string(),
        });
    }
    Ok(())
}

fn ensure_blank_tail(element: &Element) -> Result<()> {
    if let Some(tail) = &element.tail
        && !tail.trim().is_empty()
    {
        return Err(Error::TrailingText {
            tag: element.tag.clone(),
            text: tail.trim().to_string(),
        });
    }
    Ok(())
}
