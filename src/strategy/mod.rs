//! Boilerplate-removal strategies.
//!
//! # Module Structure
//!
//! - `dom_strip`: body text with scripts removed
//! - `density`: paragraph classification by text, stopword and link density
//! - `generic`: Readability-style article extraction
//!
//! A [`Strategy`] is picked by name. Names nobody registered do not fail;
//! they become [`Strategy::Unsupported`], which leaves the text untouched.

pub mod density;
pub mod dom_strip;
pub mod generic;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::normalize;

pub use density::DensityConfig;

/// The closed set of extraction strategies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Identity: the text is returned as given.
    None,
    /// Body text minus scripts.
    #[default]
    DomStrip,
    /// Paragraph classifier keeping content-dense blocks.
    DensityBased,
    /// External article extractor.
    GenericExtractor,
    /// A name that matches no strategy. Applies no transformation.
    Unsupported(String),
}

impl Strategy {
    /// Canonical name of the strategy.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::DomStrip => "dom-strip",
            Self::DensityBased => "density-based",
            Self::GenericExtractor => "generic-extractor",
            Self::Unsupported(name) => name,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Turn decoded HTML into plain text.
    ///
    /// Empty or whitespace-only input is returned unchanged by every strategy.
    pub fn extract(&self, text: &str, force_period: bool, density: &DensityConfig) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        match self {
            Self::None => Ok(normalize::normalize(text, force_period).into_owned()),
            Self::DomStrip => Ok(dom_strip::extract(text, force_period)),
            Self::DensityBased => Ok(density::extract(text, force_period, density)),
            Self::GenericExtractor => generic::extract(text, force_period),
            Self::Unsupported(_) => Ok(text.to_string()),
        }
    }
}

impl FromStr for Strategy {
    type Err = Infallible;

    /// Parse a strategy name, case-insensitively. Older short names are
    /// accepted as aliases.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Ok(match name.as_str() {
            "" | "none" => Self::None,
            "dom-strip" | "bs4" => Self::DomStrip,
            "density-based" | "justext" | "jst" => Self::DensityBased,
            "generic-extractor" | "boilerpipe" | "boi" => Self::GenericExtractor,
            _ => Self::Unsupported(s.to_string()),
        })
    }
}

impl From<&str> for Strategy {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(strategy) => strategy,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases_parse() {
        assert_eq!(Strategy::from("dom-strip"), Strategy::DomStrip);
        assert_eq!(Strategy::from("BS4"), Strategy::DomStrip);
        assert_eq!(Strategy::from("justext"), Strategy::DensityBased);
        assert_eq!(Strategy::from("jst"), Strategy::DensityBased);
        assert_eq!(Strategy::from("boilerpipe"), Strategy::GenericExtractor);
        assert_eq!(Strategy::from("none"), Strategy::None);
        assert_eq!(Strategy::from(""), Strategy::None);
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let strategy = Strategy::from("Magic");
        assert_eq!(strategy, Strategy::Unsupported("Magic".to_string()));
        assert!(!strategy.is_supported());
        assert_eq!(strategy.to_string(), "Magic");
    }

    #[test]
    fn display_round_trips_canonical_names() {
        for strategy in [
            Strategy::None,
            Strategy::DomStrip,
            Strategy::DensityBased,
            Strategy::GenericExtractor,
        ] {
            assert_eq!(Strategy::from(strategy.to_string().as_str()), strategy);
        }
    }

    #[test]
    fn unsupported_is_identity() {
        let text = "<body><script>x</script>y\n</body>";
        let out = Strategy::from("nope")
            .extract(text, true, &DensityConfig::default())
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn blank_input_passes_through_every_strategy() {
        for strategy in [
            Strategy::None,
            Strategy::DomStrip,
            Strategy::DensityBased,
            Strategy::GenericExtractor,
        ] {
            let out = strategy.extract(" \n ", true, &DensityConfig::default()).unwrap();
            assert_eq!(out, " \n ", "{strategy}");
        }
    }

    #[test]
    fn none_only_rewrites_breaks() {
        let config = DensityConfig::default();
        assert_eq!(Strategy::None.extract("<b>a</b>\nb", false, &config).unwrap(), "<b>a</b>\nb");
        assert_eq!(Strategy::None.extract("<b>a</b>\nb", true, &config).unwrap(), "<b>a</b>.\nb");
    }
}
