//! Block-level segmentation of a document into paragraphs.
//!
//! Every block element (and every double `<br>`) starts a new paragraph.
//! Inline markup is flattened into the surrounding paragraph, with the text
//! inside links counted separately so callers can compute link density.

use crate::dom::{self, Document, NodeRef};

/// Elements that start a new paragraph.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "center", "col",
    "colgroup", "dd", "details", "div", "dl", "dt", "fieldset", "figcaption", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "legend", "li",
    "main", "nav", "ol", "optgroup", "option", "p", "pre", "section", "summary", "table",
    "td", "textarea", "tfoot", "th", "thead", "tr",
];

/// Elements whose content never reaches the text.
pub const IGNORED_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "iframe", "object", "embed",
    "svg", "math", "canvas", "applet",
];

/// A run of text delimited by block boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Dotted tag path from the root to the element that opened the paragraph.
    pub dom_path: String,
    /// Whitespace-normalized text.
    pub text: String,
    /// Characters of text that sit inside `<a>` elements.
    pub chars_in_links: usize,
}

impl Paragraph {
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the paragraph sits inside an `h1`..`h6` element.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.dom_path.split('.').any(|tag| {
            tag.len() == 2 && tag.starts_with('h') && tag.as_bytes()[1].is_ascii_digit()
        })
    }

    /// Share of the text that is link text.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        self.chars_in_links as f64 / len as f64
    }

    #[must_use]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

#[derive(Default)]
struct Pending {
    dom_path: String,
    raw: String,
    chars_in_links: usize,
}

#[derive(Default)]
struct ParagraphMaker {
    paragraphs: Vec<Paragraph>,
    path: Vec<String>,
    current: Pending,
    link_depth: usize,
    last_was_br: bool,
}

impl ParagraphMaker {
    fn start_paragraph(&mut self) {
        let finished = std::mem::take(&mut self.current);
        let text = dom::normalize_whitespace(&finished.raw);
        if !text.is_empty() {
            self.paragraphs.push(Paragraph {
                dom_path: finished.dom_path,
                text,
                chars_in_links: finished.chars_in_links,
            });
        }
        self.current.dom_path = self.path.join(".");
    }

    fn push_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.current.raw.push(' ');
            return;
        }
        self.last_was_br = false;
        if self.link_depth > 0 {
            self.current.chars_in_links += dom::normalize_whitespace(text).chars().count();
        }
        self.current.raw.push_str(text);
    }

    fn walk(&mut self, node: &NodeRef) {
        for child in node.children() {
            if child.is_text() {
                self.push_text(&child.text());
                continue;
            }
            let Some(tag) = dom::node_tag_name(&child) else {
                continue;
            };
            if IGNORED_TAGS.contains(&tag.as_str()) {
                continue;
            }

            if tag == "br" {
                if self.last_was_br {
                    self.start_paragraph();
                } else {
                    self.current.raw.push(' ');
                }
                self.last_was_br = true;
                continue;
            }
            self.last_was_br = false;

            let block = BLOCK_TAGS.contains(&tag.as_str());
            let link = tag == "a";
            self.path.push(tag);
            if block {
                self.start_paragraph();
            }
            if link {
                self.link_depth += 1;
            }

            self.walk(&child);

            if link {
                self.link_depth -= 1;
            }
            self.path.pop();
            if block {
                self.start_paragraph();
            }
        }
    }
}

/// Split `doc` into paragraphs in document order, dropping empty ones.
#[must_use]
pub fn make_paragraphs(doc: &Document) -> Vec<Paragraph> {
    let mut maker = ParagraphMaker::default();
    maker.walk(&doc.root());
    maker.start_paragraph();
    maker.paragraphs
}

/// Parse `html` and split it into paragraphs.
#[must_use]
pub fn paragraphs_of(html: &str) -> Vec<Paragraph> {
    make_paragraphs(&dom::parse(html))
}
