//! Generic article extraction.
//!
//! The whole document goes to a Readability implementation (`dom_smoothie`);
//! the article it isolates is rendered back to text one block per line.

use crate::error::Result;
#[cfg(feature = "readability")]
use crate::{dom, error::Error, normalize, paragraphs};

/// Run Readability over `html` and return the article text, every block
/// followed by a line break.
#[cfg(feature = "readability")]
pub fn extract(html: &str, force_period: bool) -> Result<String> {
    use dom_smoothie::Readability;

    let doc = dom::parse(html);
    let mut reader = Readability::with_document(doc, None, None)
        .map_err(|e| Error::ParseError(format!("readability setup failed: {e}")))?;
    let article = reader
        .parse()
        .map_err(|e| Error::ParseError(format!("no article found: {e}")))?;

    let content = dom::parse(&article.content);
    let mut text = String::new();
    for paragraph in paragraphs::make_paragraphs(&content) {
        text.push_str(&paragraph.text);
        text.push('\n');
    }

    Ok(if force_period {
        normalize::force_periods(&text)
    } else {
        text
    })
}

/// Without the `readability` feature there is no article extractor to call;
/// the text is left as it is.
#[cfg(not(feature = "readability"))]
pub fn extract(html: &str, _force_period: bool) -> Result<String> {
    tracing::warn!("generic extractor unavailable: built without the `readability` feature");
    Ok(html.to_string())
}
