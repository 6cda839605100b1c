//! Restaurant Reviews corpus.
//!
//! The corpus is a folder of XML files, one per restaurant:
//!
//! ```xml
//! <Restaurant id="R1">
//!     <Name>Cafe</Name>
//!     <Reviews>
//!         <Review>
//!             <Body>Great pancakes.</Body>
//!             <Rating>5</Rating>
//!             <Pros>pancakes, coffee</Pros>
//!             <Cons>noise</Cons>
//!         </Review>
//!     </Reviews>
//! </Restaurant>
//! ```
//!
//! Files are read on the worker pool, then reviews are flattened into one row per review
//! (restaurant id/name repeated on each row), and restaurants are deduplicated by id.
//!
//! Citation for the Restaurant Reviews data:
//! Beyond the stars: improving rating predictions using review text content.
//! G Ganu, N Elhadad, A Marian. Proc. WebDB. 1-6. 2009.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::{BatchProcessing, Parameters};
use crate::error::Error;
use crate::io::reader::pool::BatchReader;
use crate::io::reader::xml::Element;
use crate::io::writer::store::Store;
use crate::io::writer::table::{Column, Record, SqlType, Table, Value};

use super::pipeline::{Pipeline, Summary};

pub const REVIEWS_TABLE: &str = "restaurantreviews_reviews";
pub const RESTAURANTS_TABLE: &str = "restaurantreviews_restaurants";

/// Review container of a single restaurant file, along with the restaurant identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantFile {
    pub id: String,
    pub name: Option<String>,
    pub reviews: Element,
}

impl RestaurantFile {
    pub fn from_element(root: Element) -> Result<Self, Error> {
        let id = root.require_attribute("id")?.to_string();
        let name = root.require("Name")?.text().map(String::from);
        let parent = root.name().to_string();

        let reviews = root
            .into_children()
            .into_iter()
            .find(|child| child.name() == "Reviews")
            .ok_or(Error::MissingElement {
                parent,
                name: "Reviews".to_string(),
            })?;

        Ok(Self { id, name, reviews })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_element(Element::from_path(path)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub review: Option<String>,
    pub rating: Option<String>,
    pub pro_tags: Option<String>,
    pub con_tags: Option<String>,
    pub restaurant_id: String,
    pub restaurant_name: Option<String>,
}

impl Review {
    fn from_element(
        review: &Element,
        restaurant_id: &str,
        restaurant_name: Option<&str>,
    ) -> Result<Self, Error> {
        let text_of = |name: &str| -> Result<Option<String>, Error> {
            Ok(review.require(name)?.text().map(String::from))
        };

        Ok(Self {
            review: text_of("Body")?,
            rating: text_of("Rating")?,
            pro_tags: text_of("Pros")?,
            con_tags: text_of("Cons")?,
            restaurant_id: restaurant_id.to_string(),
            restaurant_name: restaurant_name.map(String::from),
        })
    }
}

impl Record for Review {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("review", SqlType::Text),
            // raw text is stored, integer affinity converts numeric ratings.
            Column::new("rating", SqlType::Integer),
            Column::new("pro_tags", SqlType::Text),
            Column::new("con_tags", SqlType::Text),
            Column::new("id", SqlType::Text),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.review.clone().into(),
            self.rating.clone().into(),
            self.pro_tags.clone().into(),
            self.con_tags.clone().into(),
            self.restaurant_id.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: String,
    pub restaurant_name: Option<String>,
}

impl Record for Restaurant {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", SqlType::Text),
            Column::new("restaurant_name", SqlType::Text),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.as_str().into(),
            self.restaurant_name.clone().into(),
        ]
    }
}

/// Extract one row per review of a restaurant file.
///
/// Fails if a review misses one of its `Body`, `Rating`, `Pros` or `Cons` fields.
pub fn extract_reviews(file: &RestaurantFile) -> Result<Vec<Review>, Error> {
    if file.reviews.children().is_empty() {
        warn!("[{}] no reviews", file.id);
    }

    file.reviews
        .children()
        .iter()
        .map(|review| Review::from_element(review, &file.id, file.name.as_deref()))
        .collect()
}

/// Concatenate reviews of every file, keeping file order.
pub fn extract_all_reviews(files: &[RestaurantFile]) -> Result<Vec<Review>, Error> {
    let mut reviews = Vec::new();
    for file in files {
        reviews.extend(extract_reviews(file)?);
    }
    Ok(reviews)
}

/// Restaurants referenced by reviews, deduplicated by id (first occurrence wins).
pub fn restaurants(reviews: &[Review]) -> Vec<Restaurant> {
    let mut seen = HashSet::new();
    reviews
        .iter()
        .filter(|r| seen.insert(r.restaurant_id.as_str()))
        .map(|r| Restaurant {
            id: r.restaurant_id.clone(),
            restaurant_name: r.restaurant_name.clone(),
        })
        .collect()
}

pub struct RestaurantReviews {
    src: PathBuf,
    dst: PathBuf,
    batch: BatchProcessing,
}

impl RestaurantReviews {
    pub fn new(src: PathBuf, dst: PathBuf, batch: BatchProcessing) -> Self {
        Self { src, dst, batch }
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self, Error> {
        Ok(Self::new(
            params.restaurantreviews_path()?.to_path_buf(),
            params.database_path().to_path_buf(),
            params.batch_processing()?,
        ))
    }
}

impl Pipeline<Summary> for RestaurantReviews {
    fn run(&self) -> Result<Summary, Error> {
        info!("restaurant reviews: reading {:?}", self.src);
        let reader = BatchReader::from_parameters(&self.batch)?;
        let files = reader.read_files(&self.src, "*.xml", RestaurantFile::from_path)?;
        if files.is_empty() {
            warn!("no xml files found in {:?}", self.src);
        }

        let reviews = extract_all_reviews(&files)?;
        let restaurants = restaurants(&reviews);

        let reviews = Table::from_records(&reviews);
        let restaurants = Table::from_records(&restaurants);

        let mut store = Store::open(&self.dst)?;
        store.replace_table(REVIEWS_TABLE, &reviews)?;
        store.replace_table(RESTAURANTS_TABLE, &restaurants)?;
        store.close()?;

        let mut summary = Summary::default();
        summary.add(REVIEWS_TABLE, reviews.shape());
        summary.add(RESTAURANTS_TABLE, restaurants.shape());
        info!("restaurant reviews: done");
        Ok(summary)
    }
}
