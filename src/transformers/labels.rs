//! Sentiment labels derived from continuous sentiment values (in `[0, 1]`).
//!
//! Thresholds are the ones recommended by the treebank authors:
//!
//! | value              | [SentimentLabel] | [sentiment_exists] |
//! |--------------------|------------------|--------------------|
//! | `v <= 0.4`         | Negative (0)     | 1                  |
//! | `0.4 < v <= 0.6`   | Neutral (1)      | 0                  |
//! | `0.6 < v`          | Positive (2)     | 1                  |

pub const NEGATIVE_THRESHOLD: f64 = 0.4;
pub const POSITIVE_THRESHOLD: f64 = 0.6;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Negative = 0,
    Neutral = 1,
    Positive = 2,
}

impl SentimentLabel {
    pub fn from_value(value: f64) -> Self {
        if value <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else if value <= POSITIVE_THRESHOLD {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Positive
        }
    }

    pub fn as_i64(&self) -> i64 {
        *self as i64
    }
}

/// `0` for neutral values, `1` when some (positive or negative) sentiment is present.
pub fn sentiment_exists(value: f64) -> i64 {
    if value > NEGATIVE_THRESHOLD && value <= POSITIVE_THRESHOLD {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::{sentiment_exists, SentimentLabel};

    #[test]
    fn test_three_way() {
        assert_eq!(SentimentLabel::from_value(0.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_value(0.4), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_value(0.40001), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_value(0.6), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_value(0.60001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_value(1.0), SentimentLabel::Positive);
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(SentimentLabel::Negative.as_i64(), 0);
        assert_eq!(SentimentLabel::Neutral.as_i64(), 1);
        assert_eq!(SentimentLabel::Positive.as_i64(), 2);
    }

    #[test]
    fn test_exists() {
        assert_eq!(sentiment_exists(0.4), 1);
        assert_eq!(sentiment_exists(0.5), 0);
        assert_eq!(sentiment_exists(0.6), 0);
        assert_eq!(sentiment_exists(0.61), 1);
        assert_eq!(sentiment_exists(0.0), 1);
    }
}
