//! Density-based boilerplate removal.
//!
//! Paragraphs are first classified on their own (length, stopword density,
//! link density), then short and borderline paragraphs are re-classified from
//! their neighbours, the way jusText does it. Only paragraphs that end up
//! `Good` survive.

use crate::paragraphs::{self, Paragraph};
use crate::stoplists;

/// Thresholds of the paragraph classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    /// Paragraphs shorter than this (in characters) are `Short`.
    pub length_low: usize,
    /// Paragraphs longer than this with enough stopwords are `Good`.
    pub length_high: usize,
    /// Minimum stopword density for `NearGood`.
    pub stopwords_low: f64,
    /// Minimum stopword density for `Good`.
    pub stopwords_high: f64,
    /// Paragraphs with more link text than this share are `Bad`.
    pub max_link_density: f64,
    /// How far (in characters) a heading may sit from good content and still
    /// be kept.
    pub max_heading_distance: usize,
    /// Disable the heading rules.
    pub no_headings: bool,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            length_low: 70,
            length_high: 200,
            stopwords_low: 0.30,
            stopwords_high: 0.32,
            max_link_density: 0.2,
            max_heading_distance: 200,
            no_headings: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphClass {
    Good,
    NearGood,
    Short,
    Bad,
}

/// A paragraph with its context-free and final classes.
#[derive(Debug, Clone)]
pub struct ClassifiedParagraph {
    pub paragraph: Paragraph,
    pub context_free: ParagraphClass,
    pub class: ParagraphClass,
}

impl ClassifiedParagraph {
    #[must_use]
    pub fn is_boilerplate(&self) -> bool {
        self.class != ParagraphClass::Good
    }
}

fn stopword_density(paragraph: &Paragraph) -> f64 {
    let (words, stopwords) = paragraph
        .words()
        .fold((0usize, 0usize), |(w, s), word| {
            (w + 1, s + usize::from(stoplists::is_stopword(word)))
        });
    if words == 0 {
        return 0.0;
    }
    stopwords as f64 / words as f64
}

fn classify_context_free(paragraph: &Paragraph, config: &DensityConfig) -> ParagraphClass {
    let length = paragraph.len();
    let density = stopword_density(paragraph);

    if paragraph.link_density() > config.max_link_density {
        ParagraphClass::Bad
    } else if paragraph.text.contains('\u{a9}') || paragraph.text.contains("&copy") {
        ParagraphClass::Bad
    } else if paragraph.dom_path.split('.').any(|tag| tag == "select") {
        ParagraphClass::Bad
    } else if length < config.length_low {
        if paragraph.chars_in_links > 0 {
            ParagraphClass::Bad
        } else {
            ParagraphClass::Short
        }
    } else if density >= config.stopwords_high {
        if length > config.length_high {
            ParagraphClass::Good
        } else {
            ParagraphClass::NearGood
        }
    } else if density >= config.stopwords_low {
        ParagraphClass::NearGood
    } else {
        ParagraphClass::Bad
    }
}

/// Class of the nearest neighbour that is not `Short` (and not `NearGood`
/// when `ignore_near_good`). Document edges count as `Bad`.
fn neighbour(
    mut indices: impl Iterator<Item = usize>,
    classes: &[ParagraphClass],
    ignore_near_good: bool,
) -> ParagraphClass {
    indices
        .find_map(|j| match classes[j] {
            ParagraphClass::Short => None,
            ParagraphClass::NearGood if ignore_near_good => None,
            class => Some(class),
        })
        .unwrap_or(ParagraphClass::Bad)
}

fn prev_neighbour(i: usize, classes: &[ParagraphClass], ignore_near_good: bool) -> ParagraphClass {
    neighbour((0..i).rev(), classes, ignore_near_good)
}

fn next_neighbour(i: usize, classes: &[ParagraphClass], ignore_near_good: bool) -> ParagraphClass {
    neighbour(i + 1..classes.len(), classes, ignore_near_good)
}

/// Whether good content follows paragraph `i` within `max_distance` characters.
fn good_content_follows(
    i: usize,
    paragraphs: &[Paragraph],
    classes: &[ParagraphClass],
    max_distance: usize,
) -> bool {
    let mut distance = 0;
    for j in i + 1..paragraphs.len() {
        if distance > max_distance {
            break;
        }
        if classes[j] == ParagraphClass::Good {
            return true;
        }
        distance += paragraphs[j].len();
    }
    false
}

fn revise(paragraphs: &[Paragraph], context_free: &[ParagraphClass], config: &DensityConfig) -> Vec<ParagraphClass> {
    let mut classes = context_free.to_vec();

    // Short headings close to good content get a second chance
    if !config.no_headings {
        for i in 0..paragraphs.len() {
            if paragraphs[i].is_heading()
                && classes[i] == ParagraphClass::Short
                && good_content_follows(i, paragraphs, &classes, config.max_heading_distance)
            {
                classes[i] = ParagraphClass::NearGood;
            }
        }
    }

    // Short paragraphs take the class of their surroundings
    let mut revised: Vec<(usize, ParagraphClass)> = Vec::new();
    for i in 0..classes.len() {
        if classes[i] != ParagraphClass::Short {
            continue;
        }
        let prev = prev_neighbour(i, &classes, true);
        let next = next_neighbour(i, &classes, true);
        let class = if prev == ParagraphClass::Good && next == ParagraphClass::Good {
            ParagraphClass::Good
        } else if prev == ParagraphClass::Bad && next == ParagraphClass::Bad {
            ParagraphClass::Bad
        } else if (prev == ParagraphClass::Bad
            && prev_neighbour(i, &classes, false) == ParagraphClass::NearGood)
            || (next == ParagraphClass::Bad
                && next_neighbour(i, &classes, false) == ParagraphClass::NearGood)
        {
            ParagraphClass::Good
        } else {
            ParagraphClass::Bad
        };
        revised.push((i, class));
    }
    for (i, class) in revised {
        classes[i] = class;
    }

    // Near-good paragraphs survive unless surrounded by bad ones
    let mut revised: Vec<(usize, ParagraphClass)> = Vec::new();
    for i in 0..classes.len() {
        if classes[i] != ParagraphClass::NearGood {
            continue;
        }
        let prev = prev_neighbour(i, &classes, true);
        let next = next_neighbour(i, &classes, true);
        let class = if prev == ParagraphClass::Bad && next == ParagraphClass::Bad {
            ParagraphClass::Bad
        } else {
            ParagraphClass::Good
        };
        revised.push((i, class));
    }
    for (i, class) in revised {
        classes[i] = class;
    }

    // Headings that lost out but lead into good content come back
    if !config.no_headings {
        for i in 0..paragraphs.len() {
            if paragraphs[i].is_heading()
                && classes[i] == ParagraphClass::Bad
                && context_free[i] != ParagraphClass::Bad
                && good_content_follows(i, paragraphs, &classes, config.max_heading_distance)
            {
                classes[i] = ParagraphClass::Good;
            }
        }
    }

    classes
}

/// Segment `html` into paragraphs and classify each one.
#[must_use]
pub fn classify(html: &str, config: &DensityConfig) -> Vec<ClassifiedParagraph> {
    let paragraphs = paragraphs::paragraphs_of(html);
    let context_free: Vec<_> = paragraphs
        .iter()
        .map(|p| classify_context_free(p, config))
        .collect();
    let classes = revise(&paragraphs, &context_free, config);

    paragraphs
        .into_iter()
        .zip(context_free)
        .zip(classes)
        .map(|((paragraph, context_free), class)| ClassifiedParagraph {
            paragraph,
            context_free,
            class,
        })
        .collect()
}

/// Text of every non-boilerplate paragraph, each on its own line.
///
/// The output always opens with a single line break, even when nothing
/// survives. With `force_period` each paragraph ends in `.` before its break.
#[must_use]
pub fn extract(html: &str, force_period: bool, config: &DensityConfig) -> String {
    let terminator = if force_period { ".\n" } else { "\n" };
    let mut text = String::from("\n");
    for classified in classify(html, config) {
        if classified.is_boilerplate() {
            continue;
        }
        text.push_str(&classified.paragraph.text);
        text.push_str(terminator);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "It was the first time that the committee had agreed on anything, and \
        the members of the board were not at all sure what they should do with the result of \
        their long and difficult discussion about the future of the old town library.";

    fn page() -> String {
        format!(
            "<html><body>\
             <nav><a href='/'>Home</a> <a href='/news'>News</a> <a href='/about'>About us</a></nav>\
             <h1>Library saved</h1>\
             <p>{ARTICLE}</p>\
             <p>{ARTICLE}</p>\
             <footer>\u{a9} 2024 Town Gazette. All rights reserved.</footer>\
             </body></html>"
        )
    }

    #[test]
    fn keeps_article_drops_navigation_and_footer() {
        let text = extract(&page(), false, &DensityConfig::default());
        assert!(text.starts_with('\n'));
        assert!(text.contains("the committee had agreed"));
        assert!(!text.contains("About us"));
        assert!(!text.contains("rights reserved"));
    }

    #[test]
    fn heading_before_good_content_is_kept() {
        let text = extract(&page(), false, &DensityConfig::default());
        assert!(text.contains("Library saved\n"));
    }

    #[test]
    fn headings_can_be_disabled() {
        let config = DensityConfig {
            no_headings: true,
            ..DensityConfig::default()
        };
        let classified = classify(&page(), &config);
        let heading = classified
            .iter()
            .find(|c| c.paragraph.text == "Library saved")
            .unwrap();
        assert_eq!(heading.context_free, ParagraphClass::Short);
        // Bad navigation on one side is enough to drop a short paragraph
        assert_eq!(heading.class, ParagraphClass::Bad);
    }

    #[test]
    fn force_period_terminates_each_paragraph() {
        let text = extract(&page(), true, &DensityConfig::default());
        assert!(text.starts_with('\n'));
        assert!(text.ends_with(".\n"));
        assert!(text.contains("Library saved.\n"));
    }

    #[test]
    fn empty_content_yields_single_break() {
        let html = "<html><body><a href='/'>Home</a></body></html>";
        assert_eq!(extract(html, false, &DensityConfig::default()), "\n");
        assert_eq!(extract(html, true, &DensityConfig::default()), "\n");
    }

    #[test]
    fn link_heavy_paragraph_is_bad() {
        let html = format!("<p><a href='/x'>{ARTICLE}</a></p>");
        let classified = classify(&html, &DensityConfig::default());
        assert_eq!(classified[0].context_free, ParagraphClass::Bad);
    }

    #[test]
    fn stopword_density_counts_function_words() {
        let p = Paragraph {
            dom_path: "p".to_string(),
            text: "the cat and the dog".to_string(),
            chars_in_links: 0,
        };
        assert!((stopword_density(&p) - 0.6).abs() < 1e-9);
    }
}
