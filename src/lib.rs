//! # byehtml
//!
//! Turn raw HTML into plain, boilerplate-reduced text for NLP pipelines.
//!
//! Input can be text, an in-memory byte buffer, or a file (gzip-compressed
//! when its name ends in `.gz`). Bytes are decoded after automatic encoding
//! detection, one of several boilerplate-removal strategies runs under a
//! wall-clock deadline, and any failure along the way degrades to an empty
//! result with a diagnostic instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use byehtml::extract;
//!
//! let html = "<html><body><script>x=1</script><p>Hello world</p></body></html>";
//!
//! let result = extract(html);
//! assert!(result.success());
//! assert!(result.text().contains("Hello world"));
//! assert!(!result.text().contains("x=1"));
//! ```
//!
//! ## Strategies
//!
//! - **`none`**: the text as given
//! - **`dom-strip`**: body text with scripts removed (default)
//! - **`density-based`**: paragraphs classified by length, stopword density
//!   and link density
//! - **`generic-extractor`**: Readability article extraction
//!
//! Unknown strategy names leave the text unprocessed and add a warning to the
//! result.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and strict decoding.
pub mod encoding;

/// Resolving text, bytes and files into decoded documents.
pub mod loader;

/// Block-level paragraph segmentation.
pub mod paragraphs;

/// Stopword lists for the density-based strategy.
pub mod stoplists;

/// Boilerplate-removal strategies.
pub mod strategy;

/// Wall-clock limit around extraction.
pub mod timeout;

/// Line-break to sentence-break rewriting.
pub mod normalize;

/// The orchestrating pipeline.
pub mod pipeline;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use loader::{DecodedDocument, RawInput};
pub use options::{Options, DEFAULT_TIMEOUT};
pub use pipeline::run;
pub use result::{Diagnostic, ExtractionResult};
pub use strategy::{DensityConfig, Strategy};

/// Extracts text from an HTML string using default options.
///
/// # Example
///
/// ```rust
/// let result = byehtml::extract("not html at all");
/// assert_eq!(result.text(), "not html at all");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts text from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use byehtml::{extract_with_options, Options, Strategy};
///
/// let options = Options {
///     strategy: Strategy::DomStrip,
///     force_period: true,
///     ..Options::default()
/// };
/// let result = extract_with_options("<body><p>one</p>\n<p>two</p></body>", &options);
/// assert_eq!(result.text(), "one.\ntwo");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    run(RawInput::text(html), options)
}

/// Extracts text from HTML bytes of unknown encoding.
///
/// # Example
///
/// ```rust
/// use byehtml::{extract_bytes, Options};
///
/// // ISO-8859-1 encoded HTML with charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// let result = extract_bytes(html, &Options::default());
/// assert_eq!(result.text(), "Caf\u{e9}");
/// assert_eq!(result.encoding(), Some("windows-1252"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], options: &Options) -> ExtractionResult {
    run(RawInput::bytes(html), options)
}

/// Extracts text from an HTML file, gunzipping it when the name ends in `.gz`.
#[must_use]
pub fn extract_file(path: impl AsRef<Path>, options: &Options) -> ExtractionResult {
    run(RawInput::path(path.as_ref()), options)
}

/// Single-call entry point taking plain values.
///
/// `input` is HTML text, or a path when `is_input_file` is set. `strategy`
/// is a strategy name (unknown names leave the text unprocessed).
/// `timeout_secs` of zero or less disables the time limit.
///
/// # Example
///
/// ```rust
/// let result = byehtml::process("/no/such/file.html", true, "dom-strip", false, 5.0);
/// assert!(!result.success());
/// assert_eq!(result.text(), "");
/// ```
#[must_use]
pub fn process(
    input: &str,
    is_input_file: bool,
    strategy: &str,
    force_period: bool,
    timeout_secs: f64,
) -> ExtractionResult {
    let options = Options::default()
        .with_strategy(strategy)
        .with_force_period(force_period)
        .with_timeout_secs(timeout_secs);

    let input = if is_input_file {
        RawInput::path(input)
    } else {
        RawInput::text(input)
    };
    run(input, &options)
}
