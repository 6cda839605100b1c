use std::path::Path;

use rusqlite::Connection;
use sentiment_corpora::config::BatchProcessing;
use sentiment_corpora::error::Error;
use sentiment_corpora::pipelines::restaurantreviews::{RESTAURANTS_TABLE, REVIEWS_TABLE};
use sentiment_corpora::pipelines::{Pipeline, RestaurantReviews};

fn batch() -> BatchProcessing {
    BatchProcessing {
        num_processes: 2,
        chunksize: 1,
    }
}

fn write_restaurant(dir: &Path, id: &str, name: &str, ratings: &[u8]) {
    let reviews: String = ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| {
            format!(
                "<Review><Body>review {} of {}</Body><Rating>{}</Rating><Pros>tasty, cheap</Pros><Cons>loud</Cons></Review>",
                i, id, rating
            )
        })
        .collect();
    let doc = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Restaurant id="{}">
    <Name>{}</Name>
    <Reviews>{}</Reviews>
</Restaurant>"#,
        id, name, reviews
    );
    std::fs::write(dir.join(format!("{}.xml", id)), doc).unwrap();
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .unwrap()
}

#[test_log::test]
fn single_restaurant() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("data");
    std::fs::create_dir(&src).unwrap();
    let db = tmp.path().join("corpora.sqlite");
    write_restaurant(&src, "R1", "Cafe", &[4, 2]);

    let summary = RestaurantReviews::new(src, db.clone(), batch())
        .run()
        .unwrap();
    assert_eq!(summary.shape(REVIEWS_TABLE), Some((2, 5)));
    assert_eq!(summary.shape(RESTAURANTS_TABLE), Some((1, 2)));

    let conn = Connection::open(&db).unwrap();
    assert_eq!(count(&conn, REVIEWS_TABLE), 2);
    let ids: Vec<String> = conn
        .prepare(&format!("SELECT id FROM {} ORDER BY \"index\"", REVIEWS_TABLE))
        .unwrap()
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, vec!["R1", "R1"]);

    let (id, name): (String, String) = conn
        .query_row(
            &format!("SELECT id, restaurant_name FROM {}", RESTAURANTS_TABLE),
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!((id.as_str(), name.as_str()), ("R1", "Cafe"));

    // numeric ratings are stored as integers
    let rating: i64 = conn
        .query_row(
            &format!("SELECT rating FROM {} WHERE \"index\" = 0", REVIEWS_TABLE),
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(rating, 4);
}

#[test]
fn many_restaurants() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("data");
    std::fs::create_dir(&src).unwrap();
    let db = tmp.path().join("corpora.sqlite");

    let mut expected = 0;
    for i in 0..20 {
        let ratings: Vec<u8> = (0..(i % 4)).map(|r| r as u8 + 1).collect();
        expected += ratings.len() as i64;
        write_restaurant(&src, &format!("R{:02}", i), &format!("Place {}", i), &ratings);
    }
    // not a restaurant file
    std::fs::write(src.join("README.txt"), "not xml").unwrap();

    RestaurantReviews::new(src, db.clone(), batch())
        .run()
        .unwrap();

    let conn = Connection::open(&db).unwrap();
    assert_eq!(count(&conn, REVIEWS_TABLE), expected);

    // restaurants without reviews are not persisted, ids are unique
    let (total, distinct): (i64, i64) = conn
        .query_row(
            &format!("SELECT COUNT(*), COUNT(DISTINCT id) FROM {}", RESTAURANTS_TABLE),
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(total, 15);
    assert_eq!(total, distinct);

    // every review references a known restaurant
    let orphans: i64 = conn
        .query_row(
            &format!(
                "SELECT COUNT(*) FROM {} WHERE id NOT IN (SELECT id FROM {})",
                REVIEWS_TABLE, RESTAURANTS_TABLE
            ),
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn rerun_replaces_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("data");
    std::fs::create_dir(&src).unwrap();
    let db = tmp.path().join("corpora.sqlite");
    write_restaurant(&src, "R1", "Cafe", &[1, 2, 3]);

    let pipeline = RestaurantReviews::new(src, db.clone(), batch());
    pipeline.run().unwrap();
    pipeline.run().unwrap();

    let conn = Connection::open(&db).unwrap();
    assert_eq!(count(&conn, REVIEWS_TABLE), 3);
    assert_eq!(count(&conn, RESTAURANTS_TABLE), 1);
}

#[test]
fn malformed_review_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("data");
    std::fs::create_dir(&src).unwrap();
    let db = tmp.path().join("corpora.sqlite");
    write_restaurant(&src, "R1", "Cafe", &[1]);
    std::fs::write(
        src.join("R2.xml"),
        r#"<Restaurant id="R2"><Name>Bad</Name><Reviews><Review><Body>no rating</Body></Review></Reviews></Restaurant>"#,
    )
    .unwrap();

    let res = RestaurantReviews::new(src, db.clone(), batch()).run();
    assert!(matches!(res, Err(Error::MissingElement { .. })));

    // the store is never opened
    assert!(!db.exists());
}
