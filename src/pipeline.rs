//! The extraction pipeline: load, decode, extract under a deadline.
//!
//! Every failure along the way is caught here, once, and turned into a failed
//! [`ExtractionResult`]. Nothing propagates to the caller as an error or panic.

use crate::error::Result;
use crate::loader::{self, RawInput};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::timeout::TimeoutGuard;

/// Run the whole pipeline over `input`.
///
/// 1. Resolve `input` to text (files and bytes are decoded after encoding detection)
/// 2. Run `options.strategy` on a worker thread, bounded by `options.timeout`
/// 3. Wrap the text, or the failure, into an [`ExtractionResult`]
#[must_use]
pub fn run(input: RawInput, options: &Options) -> ExtractionResult {
    let strategy = options.strategy.name().to_string();
    let warnings = unsupported_strategy_warning(options).into_iter().collect();

    let result = match try_run(input, options) {
        Ok((text, encoding)) => {
            tracing::debug!(%strategy, chars = text.len(), "extraction finished");
            ExtractionResult::succeeded(text, strategy, encoding)
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, %strategy, "extraction failed");
            ExtractionResult::failed(&err, strategy)
        }
    };
    result.with_warnings(warnings)
}

fn try_run(input: RawInput, options: &Options) -> Result<(String, Option<&'static str>)> {
    let document = loader::load(input)?;
    let encoding = document.encoding_label();

    let strategy = options.strategy.clone();
    let force_period = options.force_period;
    let density = options.density.clone();
    let text = TimeoutGuard::new(options.timeout)
        .run(move || strategy.extract(&document.text, force_period, &density))?;

    Ok((text, encoding))
}

fn unsupported_strategy_warning(options: &Options) -> Option<String> {
    if options.strategy.is_supported() {
        return None;
    }
    let warning = format!(
        "strategy {:?} not found, text left unprocessed",
        options.strategy.name()
    );
    tracing::warn!("{warning}");
    Some(warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strategy;

    #[test]
    fn text_input_has_no_encoding() {
        let result = run(RawInput::text("<body><p>a</p></body>"), &Options::default());
        assert!(result.success());
        assert_eq!(result.text(), "a");
        assert_eq!(result.encoding(), None);
        assert_eq!(result.strategy(), "dom-strip");
    }

    #[test]
    fn byte_input_reports_encoding() {
        let result = run(RawInput::bytes(b"<body>Caf\xE9</body>".to_vec()), &Options::default());
        assert_eq!(result.text(), "Café");
        assert_eq!(result.encoding(), Some("windows-1252"));
    }

    #[test]
    fn unsupported_strategy_warns_but_succeeds() {
        let options = Options::default().with_strategy("lynx");
        let result = run(RawInput::text("<body>x</body>"), &options);
        assert!(result.success());
        assert_eq!(result.text(), "<body>x</body>");
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("lynx"));
    }

    #[test]
    fn decode_failure_is_contained() {
        let options = Options {
            strategy: Strategy::None,
            ..Options::default()
        };
        let result = run(RawInput::bytes(vec![b'a', 0, b'b']), &options);
        assert!(!result.success());
        assert_eq!(result.text(), "");
        assert_eq!(result.diagnostic().map(|d| d.kind), Some("decode"));
    }
}
