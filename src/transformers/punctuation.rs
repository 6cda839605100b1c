//! Article text cleanup.
//!
//! Article bodies embed literal `<p>`/`</p>` paragraph markers.
//! Cleaning is done in this order:
//! 1. opening markers are removed,
//! 1. closing markers are replaced by a single space,
//! 1. ASCII punctuation (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``) is removed.
//!
//! ```text
//! <p>Hello</p> World!
//! ```
//!
//! becomes
//!
//! ```text
//! Hello  World
//! ```
use super::Transform;

const OPENING: &str = "<p>";
const CLOSING: &str = "</p>";

#[derive(Debug, Default)]
pub struct StripParagraphs;

impl Transform for StripParagraphs {
    fn transform(&self, text: &str) -> String {
        text.replace(OPENING, "").replace(CLOSING, " ")
    }
}

#[derive(Debug, Default)]
pub struct StripPunctuation;

impl Transform for StripPunctuation {
    fn transform(&self, text: &str) -> String {
        text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }
}

/// [StripParagraphs] then [StripPunctuation].
#[derive(Debug, Default)]
pub struct CleanArticle {
    paragraphs: StripParagraphs,
    punctuation: StripPunctuation,
}

impl Transform for CleanArticle {
    fn transform(&self, text: &str) -> String {
        self.punctuation.transform(&self.paragraphs.transform(text))
    }
}
