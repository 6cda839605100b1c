//! SemEval16 ABSA (Aspect Based Sentiment Analysis) restaurants corpus.
//!
//! The corpus is a single XML file:
//!
//! ```xml
//! <Reviews>
//!     <Review rid="1004293">
//!         <sentences>
//!             <sentence id="1004293:0">
//!                 <text>Judging from previous posts this used to be a good place.</text>
//!                 <Opinions>
//!                     <Opinion target="place" category="RESTAURANT#GENERAL" polarity="negative" from="51" to="56"/>
//!                 </Opinions>
//!             </sentence>
//!         </sentences>
//!     </Review>
//! </Reviews>
//! ```
//!
//! Each top-level element is processed on the worker pool.
//! Sentences that carry opinions become rows of the reviews table,
//! and their opinions become rows of the opinion table, linked by `review_idx`.
//!
//! `review_idx` is assigned once every review has been collected (in corpus order),
//! and is stored as the `index` of the reviews table.
//! It indexes the *retained* sentences, not the raw file order.
//!
//! Citation:
//! Pontiki, Maria, et al. "Semeval-2016 task 5: Aspect based sentiment analysis."
//! International workshop on semantic evaluation. 2016.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{BatchProcessing, Parameters};
use crate::error::Error;
use crate::filtering::{Filter, HasAnnotations};
use crate::io::reader::pool::BatchReader;
use crate::io::reader::xml::Element;
use crate::io::writer::store::Store;
use crate::io::writer::table::{Column, Record, SqlType, Table, Value};

use super::pipeline::{Pipeline, Summary};

pub const REVIEWS_TABLE: &str = "semeval16_reviews";
pub const OPINIONS_TABLE: &str = "semeval16_opinion_data";

/// A target annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opinion {
    pub target: Option<String>,
    pub category: Option<String>,
    pub polarity: Option<String>,
    /// character offsets of the target in the review text.
    pub from: i64,
    pub to: i64,
}

impl Opinion {
    fn parse_offset(e: &Element, name: &str) -> Result<i64, Error> {
        let raw = e.require_attribute(name)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidNumber {
                field: name.to_string(),
                value: raw.to_string(),
            })
    }

    pub fn from_element(e: &Element) -> Result<Self, Error> {
        for (key, _) in e.attributes() {
            if !matches!(
                key.as_str(),
                "target" | "category" | "polarity" | "from" | "to"
            ) {
                debug!("ignoring opinion attribute {:?}", key);
            }
        }

        Ok(Self {
            target: e.attribute("target").map(String::from),
            category: e.attribute("category").map(String::from),
            polarity: e.attribute("polarity").map(String::from),
            from: Self::parse_offset(e, "from")?,
            to: Self::parse_offset(e, "to")?,
        })
    }
}

/// A review sentence along with its annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedReview {
    pub text: Option<String>,
    pub opinions: Vec<Opinion>,
}

/// Extract annotated sentences of a top-level review element.
///
/// The first child of `review` is its sentences container.
/// Sentences without opinions are skipped.
pub fn extract_reviews(review: &Element) -> Result<Vec<AnnotatedReview>, Error> {
    let sentences = review.require_nth(0)?;
    let filter = HasAnnotations;

    sentences
        .children()
        .iter()
        .filter(|sentence| filter.detect(*sentence))
        .map(|sentence| -> Result<AnnotatedReview, Error> {
            let text = sentence.require_nth(0)?.text().map(String::from);
            let opinions = sentence
                .require_nth(1)?
                .children()
                .iter()
                .map(Opinion::from_element)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AnnotatedReview { text, opinions })
        })
        .collect()
}

/// Load the top-level review elements of the corpus file.
pub fn parse_corpus(path: &Path) -> Result<Vec<Element>, Error> {
    Ok(Element::from_path(path)?.into_children())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub review_idx: i64,
    pub review: Option<String>,
}

impl Record for ReviewRow {
    fn columns() -> Vec<Column> {
        vec![Column::new("review", SqlType::Text)]
    }

    fn values(&self) -> Vec<Value> {
        vec![self.review.clone().into()]
    }

    fn index(&self) -> Option<i64> {
        Some(self.review_idx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionRow {
    pub review_idx: i64,
    pub opinion: Opinion,
}

impl Record for OpinionRow {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("target", SqlType::Text),
            Column::new("category", SqlType::Text),
            Column::new("polarity", SqlType::Text),
            Column::new("from", SqlType::Integer),
            Column::new("to", SqlType::Integer),
            Column::new("review_idx", SqlType::Integer),
        ]
    }

    fn values(&self) -> Vec<Value> {
        let o = &self.opinion;
        vec![
            o.target.clone().into(),
            o.category.clone().into(),
            o.polarity.clone().into(),
            o.from.into(),
            o.to.into(),
            self.review_idx.into(),
        ]
    }
}

/// Assign each review its `review_idx` (its position in `reviews`)
/// and tag every opinion with the index of its review.
pub fn flatten(reviews: Vec<AnnotatedReview>) -> (Vec<ReviewRow>, Vec<OpinionRow>) {
    let mut review_rows = Vec::with_capacity(reviews.len());
    let mut opinion_rows = Vec::new();

    for (idx, review) in reviews.into_iter().enumerate() {
        let review_idx = idx as i64;
        opinion_rows.extend(review.opinions.into_iter().map(|opinion| OpinionRow {
            review_idx,
            opinion,
        }));
        review_rows.push(ReviewRow {
            review_idx,
            review: review.text,
        });
    }

    (review_rows, opinion_rows)
}

pub struct SemEval16 {
    src: PathBuf,
    dst: PathBuf,
    batch: BatchProcessing,
}

impl SemEval16 {
    pub fn new(src: PathBuf, dst: PathBuf, batch: BatchProcessing) -> Self {
        Self { src, dst, batch }
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self, Error> {
        Ok(Self::new(
            params.semeval16_path()?.to_path_buf(),
            params.database_path().to_path_buf(),
            params.batch_processing()?,
        ))
    }
}

impl Pipeline<Summary> for SemEval16 {
    fn run(&self) -> Result<Summary, Error> {
        info!("semeval16: reading {:?}", self.src);
        let elements = parse_corpus(&self.src)?;
        info!("semeval16: {} top-level reviews", elements.len());

        let reader = BatchReader::from_parameters(&self.batch)?;
        let reviews: Vec<AnnotatedReview> = reader
            .map(elements, |e| extract_reviews(&e))?
            .into_iter()
            .flatten()
            .collect();

        let (reviews, opinions) = flatten(reviews);
        let reviews = Table::from_records(&reviews);
        let opinions = Table::from_records(&opinions);

        let mut store = Store::open(&self.dst)?;
        store.replace_table(REVIEWS_TABLE, &reviews)?;
        store.replace_table(OPINIONS_TABLE, &opinions)?;
        store.close()?;

        let mut summary = Summary::default();
        summary.add(REVIEWS_TABLE, reviews.shape());
        summary.add(OPINIONS_TABLE, opinions.shape());
        info!("semeval16: done");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::io::reader::xml::Element;

    use super::{extract_reviews, flatten, Opinion};

    const REVIEW: &str = r#"<Review rid="1">
    <sentences>
        <sentence id="1:0">
            <text>Judging from previous posts this used to be a good place.</text>
            <Opinions>
                <Opinion target="place" category="RESTAURANT#GENERAL" polarity="negative" from="51" to="56"/>
            </Opinions>
        </sentence>
        <sentence id="1:1">
            <text>We went there on a Sunday.</text>
        </sentence>
        <sentence id="1:2">
            <text>The staff was rude but the food was great.</text>
            <Opinions>
                <Opinion target="staff" category="SERVICE#GENERAL" polarity="negative" from="4" to="9"/>
                <Opinion target="food" category="FOOD#QUALITY" polarity="positive" from="27" to="31"/>
            </Opinions>
        </sentence>
        <sentence id="1:3" OutOfScope="TRUE">
            <text>Nothing to see.</text>
            <Opinions/>
        </sentence>
    </sentences>
</Review>"#;

    #[test]
    fn test_extract() {
        let review = Element::parse(REVIEW).unwrap();
        let reviews = extract_reviews(&review).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(
            reviews[0].text.as_deref(),
            Some("Judging from previous posts this used to be a good place.")
        );
        assert_eq!(reviews[1].opinions.len(), 2);
        assert_eq!(
            reviews[1].opinions[1],
            Opinion {
                target: Some("food".to_string()),
                category: Some("FOOD#QUALITY".to_string()),
                polarity: Some("positive".to_string()),
                from: 27,
                to: 31,
            }
        );
    }

    #[test]
    fn test_invalid_offset() {
        let doc = r#"<Review><sentences><sentence><text>t</text><Opinions>
            <Opinion target="t" from="zero" to="1"/>
        </Opinions></sentence></sentences></Review>"#;
        let review = Element::parse(doc).unwrap();
        assert!(matches!(
            extract_reviews(&review),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_missing_offset() {
        let doc = r#"<Review><sentences><sentence><text>t</text><Opinions>
            <Opinion target="t" from="0"/>
        </Opinions></sentence></sentences></Review>"#;
        let review = Element::parse(doc).unwrap();
        assert!(matches!(
            extract_reviews(&review),
            Err(Error::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_no_sentences_container() {
        let review = Element::parse("<Review/>").unwrap();
        assert!(extract_reviews(&review).is_err());
    }

    #[test]
    fn test_flatten() {
        let review = Element::parse(REVIEW).unwrap();
        let mut reviews = extract_reviews(&review).unwrap();
        reviews.extend(extract_reviews(&review).unwrap());

        let (review_rows, opinion_rows) = flatten(reviews);
        assert_eq!(review_rows.len(), 4);
        assert_eq!(opinion_rows.len(), 6);

        let idx: Vec<i64> = opinion_rows.iter().map(|o| o.review_idx).collect();
        assert_eq!(idx, vec![0, 1, 1, 2, 3, 3]);

        // every back reference is valid, every review has at least an opinion
        for (pos, row) in review_rows.iter().enumerate() {
            assert_eq!(row.review_idx, pos as i64);
            assert!(opinion_rows.iter().any(|o| o.review_idx == row.review_idx));
        }
        assert!(opinion_rows
            .iter()
            .all(|o| (o.review_idx as usize) < review_rows.len()));
    }
}
