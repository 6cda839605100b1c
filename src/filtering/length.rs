//! string length filtering
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided string has no unicode codepoint.
#[derive(Debug, Default)]
pub struct Length;

impl Filter<&str> for Length {
    fn detect(&self, s: &str) -> bool {
        s.chars().next().is_some()
    }
}
