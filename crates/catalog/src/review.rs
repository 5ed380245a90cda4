//! Product reviews and their aggregate statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{ClientError, ClientResult, Listable};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Minimum comment length after trimming.
pub const MIN_COMMENT_CHARS: usize = 10;

/// A review as listed under a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub verified_purchase: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listable for ReviewRecord {
    fn sort_name(&self) -> &str {
        &self.user_name
    }

    fn price_cents(&self) -> i64 {
        0
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    // Ratings ride the stock-level axis: ascending puts the worst-rated
    // reviews first.
    fn stock(&self) -> i64 {
        self.rating as i64
    }

    // The activity flag for reviews is the verified-purchase marker.
    fn is_active(&self) -> bool {
        self.verified_purchase
    }
}

/// Aggregate rating statistics for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Average rating rounded to one decimal; 0.0 when there are none.
    pub average: f64,
    pub total: u64,
    /// Review counts for one through five stars.
    pub distribution: [u64; 5],
}

impl ReviewStats {
    /// Recompute statistics from a full set of reviews.
    pub fn from_reviews(reviews: &[ReviewRecord]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let mut distribution = [0u64; 5];
        let mut sum: u64 = 0;
        for review in reviews {
            let rating = review.rating.clamp(MIN_RATING, MAX_RATING);
            distribution[(rating - 1) as usize] += 1;
            sum += rating as u64;
        }

        let total = reviews.len() as u64;
        let average = ((sum as f64 / total as f64) * 10.0).round() / 10.0;

        Self {
            average,
            total,
            distribution,
        }
    }
}

/// Client-side mirror of the server's submission rules, so an invalid
/// review never leaves the browser.
pub fn validate_review(rating: u8, comment: &str) -> ClientResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ClientError::application(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )));
    }
    if comment.trim().chars().count() < MIN_COMMENT_CHARS {
        return Err(ClientError::application(format!(
            "The comment must have at least {MIN_COMMENT_CHARS} characters."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, rating: u8) -> ReviewRecord {
        ReviewRecord {
            id,
            product_id: 1,
            user_name: format!("user-{id}"),
            rating,
            comment: "solid product, would buy again".into(),
            verified_purchase: false,
            created_at: None,
        }
    }

    #[test]
    fn stats_average_rounds_to_one_decimal() {
        let stats = ReviewStats::from_reviews(&[review(1, 5), review(2, 4), review(3, 4)]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average, 4.3);
        assert_eq!(stats.distribution, [0, 0, 0, 2, 1]);
    }

    #[test]
    fn stats_of_nothing_are_zero() {
        let stats = ReviewStats::from_reviews(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn validation_rejects_out_of_range_ratings() {
        assert!(validate_review(0, "a perfectly fine comment").is_err());
        assert!(validate_review(6, "a perfectly fine comment").is_err());
        assert!(validate_review(5, "a perfectly fine comment").is_ok());
    }

    #[test]
    fn validation_rejects_short_comments() {
        assert!(validate_review(4, "   short  ").is_err());
        assert!(validate_review(4, "exactly 10").is_ok());
    }
}
