//! Pure slug generation for Markdown anchors.
//!
//! Anchors come in three flavors: section anchors slugified from heading
//! text, `dfn-` anchors for definition-list terms, and `ref-` anchors for
//! bibliographic citations.

/// Generate a slug from heading or term text.
///
/// Lower-cases the text and collapses whitespace runs to single hyphens.
/// Punctuation passes through unchanged; these slugs only need to match the
/// anchors a kramdown attribute list assigns, not GitHub's heading rules.
///
/// # Examples
///
/// ```
/// use specmd::markdown::slugify;
///
/// assert_eq!(slugify("Table of Contents"), "table-of-contents");
/// assert_eq!(slugify("Version  directory"), "version-directory");
/// assert_eq!(slugify("Conformance"), "conformance");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Anchor for a definition-list term: `dfn-` + slug.
///
/// # Examples
///
/// ```
/// use specmd::markdown::dfn_anchor;
///
/// assert_eq!(dfn_anchor("Version directory"), "dfn-version-directory");
/// ```
pub fn dfn_anchor(term: &str) -> String {
    format!("dfn-{}", slugify(term))
}

/// Anchor for a citation label: `ref-` + the lower-cased label with runs of
/// whitespace and underscores collapsed to single hyphens.
///
/// # Examples
///
/// ```
/// use specmd::markdown::ref_anchor;
///
/// assert_eq!(ref_anchor("RFC2119"), "ref-rfc2119");
/// assert_eq!(ref_anchor("OCFL_Implementation"), "ref-ocfl-implementation");
/// ```
pub fn ref_anchor(label: &str) -> String {
    let mut anchor = String::with_capacity(label.len() + 4);
    anchor.push_str("ref-");
    let mut pending_hyphen = false;
    for c in label.to_lowercase().chars() {
        if c.is_whitespace() || c == '_' {
            pending_hyphen = true;
        } else {
            if pending_hyphen {
                anchor.push('-');
                pending_hyphen = false;
            }
            anchor.push(c);
        }
    }
    if pending_hyphen {
        anchor.push('-');
    }
    anchor
}
