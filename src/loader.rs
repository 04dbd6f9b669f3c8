//! Resolving raw input into decoded text.
//!
//! Text passes straight through. Bytes and files are sniffed with
//! [`detect_encoding`](crate::encoding::detect_encoding) and decoded strictly;
//! a path ending in `.gz` is gunzipped first.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::encoding::{self, EncodingGuess};
use crate::error::{Error, Result};

/// Input handed to the pipeline. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Already-decoded text.
    Text(String),
    /// An in-memory byte payload of unknown encoding.
    Bytes(Vec<u8>),
    /// A file on disk, gzip-compressed when the name ends in `.gz`.
    Path(PathBuf),
}

impl RawInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The decoded text of a [`RawInput`] and the encoding used to get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub text: String,
    /// `None` when the input was already text.
    pub encoding: Option<EncodingGuess>,
}

impl DecodedDocument {
    /// WHATWG label of the encoding the text was decoded from.
    #[must_use]
    pub fn encoding_label(&self) -> Option<&'static str> {
        self.encoding.as_ref().and_then(EncodingGuess::label)
    }
}

/// Whether `path` follows the gzip naming convention.
#[must_use]
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Resolve `input` to decoded text.
///
/// There is no retry with a second encoding: if the guessed one rejects the
/// bytes, the [`Error::DecodeError`] is surfaced as-is.
pub fn load(input: RawInput) -> Result<DecodedDocument> {
    match input {
        RawInput::Text(text) => Ok(DecodedDocument {
            text,
            encoding: None,
        }),
        RawInput::Bytes(bytes) => decode_bytes(&bytes),
        RawInput::Path(path) => {
            let bytes = read_file(&path)?;
            decode_bytes(&bytes)
        }
    }
}

fn decode_bytes(bytes: &[u8]) -> Result<DecodedDocument> {
    let guess = encoding::detect_encoding(bytes);
    tracing::debug!(encoding = ?guess.label(), source = ?guess.source(), "detected encoding");

    let text = encoding::decode(bytes, &guess)?;
    Ok(DecodedDocument {
        text,
        encoding: Some(guess),
    })
}

/// Read the complete contents of `path`, gunzipping `.gz` files.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)
        .map_err(|e| Error::DecodeError(format!("cannot open {}: {e}", path.display())))?;

    let mut bytes = Vec::new();
    if is_gzip_path(path) {
        MultiGzDecoder::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| {
                Error::DecodeError(format!("gzip decompression of {} failed: {e}", path.display()))
            })?;
    } else {
        let mut file = file;
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::DecodeError(format!("cannot read {}: {e}", path.display())))?;
    }

    Ok(bytes)
}
