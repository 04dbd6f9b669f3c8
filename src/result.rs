//! Result types for pipeline output.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// What went wrong in a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Error kind label (`"decode"`, `"parse"`, `"timeout"`, `"worker"`).
    pub kind: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {} -- {}", self.kind, self.message)
    }
}

/// Outcome of one pipeline run.
///
/// A failed result always carries empty text; there is no partial output.
/// "No content found" and "extraction failed" both yield empty text and are
/// told apart by [`success`](Self::success) and [`diagnostic`](Self::diagnostic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    text: String,
    success: bool,
    diagnostic: Option<Diagnostic>,
    strategy: String,
    encoding: Option<&'static str>,
    warnings: Vec<String>,
}

impl ExtractionResult {
    pub(crate) fn succeeded(text: String, strategy: String, encoding: Option<&'static str>) -> Self {
        Self {
            text,
            success: true,
            diagnostic: None,
            strategy,
            encoding,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn failed(err: &Error, strategy: String) -> Self {
        Self {
            text: String::new(),
            success: false,
            diagnostic: Some(Diagnostic::from(err)),
            strategy,
            encoding: None,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Extracted text; empty when the run failed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    /// Name of the strategy the run was configured with.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Encoding the input was decoded from; `None` for text input.
    #[must_use]
    pub fn encoding(&self) -> Option<&'static str> {
        self.encoding
    }

    /// Non-fatal notes, e.g. an unsupported strategy name.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_has_empty_text_and_diagnostic() {
        let err = Error::DecodeError("cannot open x".to_string());
        let result = ExtractionResult::failed(&err, "dom-strip".to_string());
        assert!(!result.success());
        assert_eq!(result.text(), "");
        let diagnostic = result.diagnostic().unwrap();
        assert_eq!(diagnostic.kind, "decode");
        assert_eq!(diagnostic.to_string(), "Error decode -- Decoding failed: cannot open x");
    }

    #[test]
    fn serializes_for_json_output() {
        let result = ExtractionResult::succeeded("hi".to_string(), "none".to_string(), Some("UTF-8"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "hi");
        assert_eq!(json["success"], true);
        assert_eq!(json["encoding"], "UTF-8");
        assert!(json["diagnostic"].is_null());
    }
}
