//! Error types for byehtml.
//!
//! Every stage of the pipeline reports failures through [`Error`]. The
//! orchestrator converts them into a failed [`ExtractionResult`](crate::ExtractionResult)
//! instead of handing them to the caller, but the kinds stay distinguishable
//! through [`Error::kind`].

use std::time::Duration;

/// Error type for loading and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into text: unreadable file, broken gzip
    /// stream, unknown encoding, or bytes the detected encoding rejects.
    #[error("Decoding failed: {0}")]
    DecodeError(String),

    /// Malformed HTML defeated a structural extraction strategy.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// The extraction strategy did not finish before the deadline.
    #[error("Extraction timed out after {:.3}s", .0.as_secs_f64())]
    TimeoutError(Duration),

    /// The guarded worker panicked or went away without a result.
    #[error("Extraction worker failed: {0}")]
    WorkerError(String),
}

impl Error {
    /// Short, stable label for the error kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DecodeError(_) => "decode",
            Self::ParseError(_) => "parse",
            Self::TimeoutError(_) => "timeout",
            Self::WorkerError(_) => "worker",
        }
    }
}

/// Result type alias for loading and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            Error::DecodeError(String::new()).kind(),
            Error::ParseError(String::new()).kind(),
            Error::TimeoutError(Duration::from_secs(1)).kind(),
            Error::WorkerError(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn timeout_message_mentions_deadline() {
        let err = Error::TimeoutError(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Extraction timed out after 1.500s");
    }
}
