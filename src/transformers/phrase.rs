//! Phrase normalization.
use itertools::Itertools;

use super::Transform;

/// Normalizes treebank phrases:
/// lowercases, removes every character that is neither a word character (alphanumeric or `_`)
/// nor whitespace, then collapses whitespace runs into single spaces.
///
/// Normalization is idempotent. Lowercasing happens first since it can yield
/// combining marks (`İ` lowercases to `i̇`) that would otherwise survive the first pass.
#[derive(Debug, Default)]
pub struct NormalizePhrase;

impl NormalizePhrase {
    fn is_kept(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c.is_whitespace()
    }
}

impl Transform for NormalizePhrase {
    fn transform(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let kept: String = lowered.chars().filter(|c| Self::is_kept(*c)).collect();
        kept.split_whitespace().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use crate::transformers::Transform;

    use super::NormalizePhrase;

    #[test]
    fn test_normalize() {
        let n = NormalizePhrase;
        assert_eq!(n.transform("The Rock is destined"), "the rock is destined");
        assert_eq!(n.transform("  A  , B ... c  "), "a b c");
        assert_eq!(n.transform("don't"), "dont");
        assert_eq!(n.transform("snake_case"), "snake_case");
        assert_eq!(n.transform("Café\tCrème"), "café crème");
    }

    #[test]
    fn test_empty() {
        let n = NormalizePhrase;
        assert_eq!(n.transform("--"), "");
        assert_eq!(n.transform(" , . "), "");
        assert_eq!(n.transform(""), "");
    }

    #[test]
    fn test_idempotent() {
        let n = NormalizePhrase;
        for phrase in [
            "The Rock is destined to be the 21st Century 's new `` Conan ''",
            "İstanbul, TÜRKİYE!",
            "-LRB- a -RRB-",
            "   ",
            "ΣΊΣΥΦΟΣ",
        ] {
            let once = n.transform(phrase);
            assert_eq!(n.transform(&once), once);
        }
    }
}
