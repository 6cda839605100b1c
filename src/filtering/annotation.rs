//! Aspect-corpus sentence filtering.
use crate::io::reader::xml::Element;

use super::Filter;

/// Keeps sentences that have an opinions container holding at least one opinion.
///
/// A sentence element is laid out as `[text, opinions]`:
/// sentences with zero or one child have no opinions container and are discarded,
/// as are sentences whose opinions container is empty.
#[derive(Debug, Default)]
pub struct HasAnnotations;

impl Filter<&Element> for HasAnnotations {
    fn detect(&self, sentence: &Element) -> bool {
        match sentence.children() {
            [_, opinions, ..] => !opinions.children().is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::filtering::Filter;
    use crate::io::reader::xml::Element;

    use super::HasAnnotations;

    fn text() -> Element {
        Element::new("text").with_text("The food was great")
    }

    #[test]
    fn test_no_container() {
        let f = HasAnnotations;
        assert!(!f.detect(&Element::new("sentence")));
        assert!(!f.detect(&Element::new("sentence").with_child(text())));
    }

    #[test]
    fn test_empty_container() {
        let s = Element::new("sentence")
            .with_child(text())
            .with_child(Element::new("Opinions"));
        assert!(!HasAnnotations.detect(&s));
    }

    #[test]
    fn test_annotated() {
        let s = Element::new("sentence").with_child(text()).with_child(
            Element::new("Opinions").with_child(Element::new("Opinion").with_attribute("target", "food")),
        );
        assert!(HasAnnotations.detect(&s));
    }
}
