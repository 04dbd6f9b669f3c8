//! Plain DOM stripping: drop scripts, keep every other piece of body text.

use crate::dom;
use crate::normalize;

/// Elements removed from the body before its text is taken.
pub const STRIPPED_TAGS: &str = "script";

/// Text content of the document body with scripts removed.
///
/// Input without a `<body>` tag is returned untouched: it is either not HTML
/// or too malformed to trust a structural reading of it.
#[must_use]
pub fn extract(html: &str, force_period: bool) -> String {
    if !dom::declares_body(html) {
        return html.to_string();
    }

    let doc = dom::parse(html);
    let body = doc.select("body");
    if body.nodes().is_empty() {
        return html.to_string();
    }

    let removed = dom::remove_all(&body, STRIPPED_TAGS);
    tracing::trace!(removed, "stripped script elements");

    let text = dom::text_content(&body).to_string();
    if force_period {
        normalize::force_periods(&text)
    } else {
        text
    }
}
