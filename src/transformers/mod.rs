/*! Text transformers and derived columns.

Transformers take a string and return a new, cleaned one.
They are used to derive columns (`words` for articles, normalized phrases for the treebank).

[labels] derives categorical sentiment labels from continuous sentiment values.
!*/
pub mod labels;
mod phrase;
mod punctuation;
mod transform;

pub use labels::SentimentLabel;
pub use phrase::NormalizePhrase;
pub use punctuation::{CleanArticle, StripParagraphs, StripPunctuation};
pub use transform::Transform;
