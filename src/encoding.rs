//! Character encoding detection and strict decoding.
//!
//! Files reach the pipeline as raw bytes of unknown provenance. This module
//! guesses their encoding and decodes them to UTF-8 without ever substituting
//! replacement characters: bytes the guessed encoding rejects are an error.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// How many leading bytes are scanned for a charset declaration.
pub const DECLARATION_SCAN_LIMIT: usize = 1024;

/// Leading bytes inspected when deciding whether a buffer is binary.
pub const BINARY_SAMPLE_LIMIT: usize = 8192;

/// A sample with at least one NUL per this many bytes is binary.
const BINARY_NUL_DIVISOR: usize = 32;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#).expect("valid regex")
});

/// What evidence an [`EncodingGuess`] rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// A UTF-8 or UTF-16 byte-order mark opens the buffer.
    ByteOrderMark,
    /// The whole buffer is well-formed UTF-8 (plain ASCII included).
    ValidUtf8,
    /// A `<meta>` charset declaration near the top of the document.
    Declared,
    /// Byte-frequency analysis picked a non-Western legacy encoding.
    Statistical,
    /// Nothing conclusive; single-byte Western fallback.
    Fallback,
    /// The buffer looks binary. No encoding applies.
    Unknown,
}

/// Best-effort character encoding of a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingGuess {
    encoding: Option<&'static Encoding>,
    source: GuessSource,
}

impl EncodingGuess {
    fn new(encoding: &'static Encoding, source: GuessSource) -> Self {
        Self {
            encoding: Some(encoding),
            source,
        }
    }

    /// The designated "no confident encoding" guess.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            encoding: None,
            source: GuessSource::Unknown,
        }
    }

    /// The guessed encoding, if any.
    #[must_use]
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// WHATWG name of the guessed encoding (e.g. `"UTF-8"`, `"windows-1252"`).
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.encoding.map(Encoding::name)
    }

    #[must_use]
    pub fn source(&self) -> GuessSource {
        self.source
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.encoding.is_none()
    }
}

/// Guess the character encoding of `bytes`.
///
/// Never fails. Evidence is weighed in this order:
/// 1. A byte-order mark
/// 2. Well-formed UTF-8 across the whole buffer (stray NULs included)
/// 3. A NUL-heavy leading sample means binary content, reported as unknown
/// 4. A `<meta>` charset declaration within the first
///    [`DECLARATION_SCAN_LIMIT`] bytes
/// 5. A confident `chardetng` guess that decodes the buffer cleanly
/// 6. windows-1252, the WHATWG superset of ISO-8859-1
///
/// The result depends only on the bytes given.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> EncodingGuess {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return EncodingGuess::new(encoding, GuessSource::ByteOrderMark);
    }

    if Encoding::utf8_valid_up_to(bytes) == bytes.len() {
        return EncodingGuess::new(UTF_8, GuessSource::ValidUtf8);
    }

    if looks_binary(bytes) {
        return EncodingGuess::unknown();
    }

    // A UTF-8 declaration was just disproved by the bytes themselves
    if let Some(encoding) = declared_encoding(bytes).filter(|e| *e != UTF_8) {
        return EncodingGuess::new(encoding, GuessSource::Declared);
    }

    if let Some(encoding) = statistical_encoding(bytes) {
        return EncodingGuess::new(encoding, GuessSource::Statistical);
    }

    EncodingGuess::new(WINDOWS_1252, GuessSource::Fallback)
}

/// Whether NULs make up a real share of the leading sample.
fn looks_binary(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(BINARY_SAMPLE_LIMIT)];
    let nuls = sample.iter().filter(|b| **b == 0).count();
    nuls > 0 && nuls * BINARY_NUL_DIVISOR >= sample.len()
}

/// Legacy encoding inferred from byte statistics.
///
/// Only guesses other than windows-1252 that chardetng rates above some
/// competitor, and that decode `bytes` without errors, are returned.
fn statistical_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let (encoding, confident) = detector.guess_assess(None, false);

    if !confident || encoding == WINDOWS_1252 {
        return None;
    }
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|_| encoding)
}

/// Encoding named by a `<meta>` declaration in the head of the document.
///
/// Labels that make no sense inside an ASCII-compatible document (UTF-16,
/// `replacement`) resolve to their output encoding, as browsers do.
#[must_use]
pub fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .find_map(|m| Encoding::for_label(m.as_bytes()))
        .map(Encoding::output_encoding)
}

/// Decode `bytes` with the encoding in `guess`.
///
/// A leading byte-order mark is dropped. Malformed sequences are not
/// replaced; they fail the whole decode.
pub fn decode(bytes: &[u8], guess: &EncodingGuess) -> Result<String> {
    let Some(encoding) = guess.encoding() else {
        return Err(Error::DecodeError(
            "unable to detect a character encoding".to_string(),
        ));
    };

    let payload = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
        _ => bytes,
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| {
            Error::DecodeError(format!(
                "byte stream is not valid {}",
                encoding.name()
            ))
        })
}
