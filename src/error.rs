//! Error types for specmd operations.

use thiserror::Error;

/// Errors that can occur while parsing or converting a document.
///
/// The structural variants all abort the current document's conversion;
/// there is no partial or degraded output once one is raised.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid reference table: {0}")]
    RefTable(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Unknown tag <{tag}> in {position}")]
    UnknownTag { tag: String, position: String },

    #[error("Duplicate section anchor: {0}")]
    DuplicateAnchor(String),

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Unknown citation label: {0}")]
    UnknownCitation(String),

    #[error("Unexpected trailing text after <{tag}>: {text:?}")]
    TrailingText { tag: String, text: String },

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
