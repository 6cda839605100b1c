//! Transform trait.

pub trait Transform {
    /// Returns a transformed copy of `text`.
    fn transform(&self, text: &str) -> String;
}
