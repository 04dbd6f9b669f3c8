//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate shared by the extraction strategies.

use regex::Regex;
use std::sync::LazyLock;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

/// An opening `<body>` tag anywhere in the source.
#[allow(clippy::expect_used)]
static BODY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s/>]").expect("valid regex"));

/// Comments and script or style elements, whose contents are never markup.
#[allow(clippy::expect_used)]
static OPAQUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?(?:-->|\z)|<(script|style)\b[^>]*>.*?(?:</(?:script|style)\s*>|\z)")
        .expect("valid regex")
});

/// Parse HTML text into a navigable document.
///
/// html5ever never rejects input; malformed markup is repaired the way a
/// browser would repair it.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Whether the source markup itself contains a `<body>` tag.
///
/// The HTML5 tree builder synthesizes a body for any input, even plain text,
/// so the parsed tree alone cannot tell real documents from fragments.
/// A `<body>` spelled inside a comment, a script or a style element does not
/// count. Attribute values are not inspected.
#[must_use]
pub fn declares_body(html: &str) -> bool {
    if !BODY_TAG_RE.is_match(html) {
        return false;
    }
    BODY_TAG_RE.is_match(&OPAQUE_RE.replace_all(html, " "))
}

/// Lowercase tag name of an element node, `None` for text, comments, etc.
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Remove every element under `root` matching `selector`, returning how many
/// were detached.
pub fn remove_all(root: &Selection, selector: &str) -> usize {
    let matched = root.select(selector);
    let count = matched.length();
    if count > 0 {
        matched.remove();
    }
    count
}

/// Collapse every whitespace run to one space and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
