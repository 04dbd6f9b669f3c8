//! Configuration options for text extraction.
//!
//! The `Options` struct selects the extraction strategy, the sentence-break
//! rewrite and the time budget of a single pipeline run.

use std::time::Duration;

use crate::strategy::{DensityConfig, Strategy};
use crate::timeout::TimeoutGuard;

/// Time budget used when none is given: five seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration options for a pipeline run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use byehtml::{Options, Strategy};
///
/// let options = Options {
///     strategy: Strategy::DensityBased,
///     force_period: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Which boilerplate-removal strategy to run.
    ///
    /// Default: `Strategy::DomStrip`
    pub strategy: Strategy,

    /// Put a period before every line break of the extracted text.
    ///
    /// Default: `false`
    pub force_period: bool,

    /// Wall-clock limit for the strategy. `None` (or zero) waits forever.
    ///
    /// Decoding the input happens before the clock starts.
    ///
    /// Default: `Some(5s)`
    pub timeout: Option<Duration>,

    /// Thresholds for `Strategy::DensityBased`.
    pub density: DensityConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            force_period: false,
            timeout: Some(DEFAULT_TIMEOUT),
            density: DensityConfig::default(),
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<Strategy>) -> Self {
        self.strategy = strategy.into();
        self
    }

    #[must_use]
    pub fn with_force_period(mut self, force_period: bool) -> Self {
        self.force_period = force_period;
        self
    }

    /// Set the time limit in seconds. Zero, negative and non-finite values
    /// disable it.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout = TimeoutGuard::from_secs_f64(secs).limit();
        self
    }
}
