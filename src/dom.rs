//! Document tree parsing.
//!
//! Builds an owned [`Element`] tree from ReSpec-style XHTML source using a
//! streaming XML reader. Text placement follows the classic element-tree
//! model: character data before an element's first child lands in `text`,
//! character data after a child's end tag lands in that child's `tail`. The
//! converter relies on both, so nothing is trimmed here.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// A parsed document node.
///
/// The tree is read-only to the converter; it borrows nodes and never
/// attaches state to them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order.
    pub attrs: Vec<(String, String)>,
    /// Character data before the first child.
    pub text: Option<String>,
    /// Character data between this node's end tag and the next sibling.
    pub tail: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `id` attribute, used as an explicit anchor.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// First direct child with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }
}

/// Parse a whole document into its root [`Element`].
///
/// The source is prepared for strict XML reading first: a UTF-8 BOM is
/// stripped and bare ` async ` attribute tokens (legal HTML, ill-formed XML)
/// are dropped. Comments, processing instructions, and DOCTYPE declarations
/// are skipped.
pub fn parse_document(src: &str) -> Result<Element> {
    let prepared = prepare_source(src);
    let mut reader = Reader::from_str(&prepared);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let elem = element_from_start(&e)?;
                attach(&mut stack, &mut root, elem)?;
            }
            Ok(Event::End(_)) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| Error::InvalidDocument("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, elem)?;
            }
            Ok(Event::Text(e)) => {
                append_text(&mut stack, &String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::CData(e)) => {
                append_text(&mut stack, &String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(resolved) = resolve_entity(&String::from_utf8_lossy(e.as_ref())) {
                    append_text(&mut stack, &resolved);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidDocument("unclosed element".to_string()));
    }
    root.ok_or_else(|| Error::InvalidDocument("no root element".to_string()))
}

/// Strip a UTF-8 BOM and drop ` async ` attribute tokens.
fn prepare_source(src: &str) -> String {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    src.replace(" async ", " ")
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let tag = String::from_utf8(e.name().as_ref().to_vec())?;
    let mut attrs = Vec::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = String::from_utf8(attr.value.to_vec())?;
        attrs.push((key, value));
    }
    Ok(Element {
        tag,
        attrs,
        ..Element::default()
    })
}

/// Hand a completed element to its parent, or make it the document root.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, elem: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(elem);
    } else if root.is_none() {
        *root = Some(elem);
    } else {
        return Err(Error::InvalidDocument(
            "multiple root elements".to_string(),
        ));
    }
    Ok(())
}

/// Append character data at the current position: before the open element's
/// first child it extends `text`, after a child it extends that child's
/// `tail`. Data outside the root element is ignored.
fn append_text(stack: &mut [Element], data: &str) {
    let Some(open) = stack.last_mut() else {
        return;
    };
    let slot = match open.children.last_mut() {
        Some(child) => &mut child.tail,
        None => &mut open.text,
    };
    match slot {
        Some(existing) => existing.push_str(data),
        None => *slot = Some(data.to_string()),
    }
}

/// Resolve XML entity references: the predefined five, numeric character
/// references, and the handful of HTML named entities that show up in
/// authoring sources. Anything else resolves to nothing.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        "mdash" => return Some("\u{2014}".to_string()),
        "ndash" => return Some("\u{2013}".to_string()),
        "nbsp" => return Some("\u{a0}".to_string()),
        "hellip" => return Some("\u{2026}".to_string()),
        "ldquo" => return Some("\u{201c}".to_string()),
        "rdquo" => return Some("\u{201d}".to_string()),
        "lsquo" => return Some("\u{2018}".to_string()),
        "rsquo" => return Some("\u{2019}".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
