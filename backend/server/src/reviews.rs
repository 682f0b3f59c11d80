//! # Reviews
//!
//! Anonymous star ratings with optional feedback, kept in process memory.
//!
//! ## Implementation
//!
//! - One `RwLock` around the review list, the id counter and the tallies
//! - Ids start at 1 and only increase
//! - At most `capacity` reviews are kept, the oldest is dropped first
//! - The summary comes from running per-star tallies, so dropped reviews
//!   still count
//! - Public views leave out the user agent, which is kept for analytics only
//! - Lost on restart, there is no database behind it
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::utils::sanitize_feedback;

pub const MAX_RATING: u8 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Rating must be between 0 and 5, got {0}")]
    InvalidRating(i64),
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: u64,
    pub rating: u8,
    pub feedback: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: u64,
    pub rating: u8,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            feedback: review.feedback.clone(),
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub count: usize,
    pub average: Option<f64>,
    /// Count of reviews per star, index 0 through 5.
    pub distribution: [usize; MAX_RATING as usize + 1],
}

struct Ledger {
    next_id: u64,
    reviews: VecDeque<Review>,
    distribution: [usize; MAX_RATING as usize + 1],
}

pub struct ReviewStore {
    ledger: RwLock<Ledger>,
    feedback_max_len: usize,
    capacity: usize,
}

impl ReviewStore {
    pub fn new(feedback_max_len: usize, capacity: usize) -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                next_id: 1,
                reviews: VecDeque::new(),
                distribution: [0; MAX_RATING as usize + 1],
            }),
            feedback_max_len,
            capacity,
        }
    }

    pub async fn submit(
        &self,
        rating: i64,
        feedback: Option<&str>,
        user_agent: Option<String>,
    ) -> Result<ReviewView, ReviewError> {
        let rating = u8::try_from(rating)
            .ok()
            .filter(|&rating| rating <= MAX_RATING)
            .ok_or(ReviewError::InvalidRating(rating))?;

        let feedback = feedback.and_then(|text| sanitize_feedback(text, self.feedback_max_len));

        let mut ledger = self.ledger.write().await;
        let review = Review {
            id: ledger.next_id,
            rating,
            feedback,
            user_agent,
            created_at: Utc::now(),
        };
        ledger.next_id += 1;
        ledger.distribution[rating as usize] += 1;

        let view = ReviewView::from(&review);
        ledger.reviews.push_back(review);

        while ledger.reviews.len() > self.capacity {
            if let Some(dropped) = ledger.reviews.pop_front() {
                debug!("Dropped review {} from memory", dropped.id);
            }
        }

        Ok(view)
    }

    /// Newest first, only among the reviews still kept.
    pub async fn recent(&self, limit: usize) -> Vec<ReviewView> {
        self.ledger
            .read()
            .await
            .reviews
            .iter()
            .rev()
            .take(limit)
            .map(ReviewView::from)
            .collect()
    }

    /// Every review ever accepted, including those no longer kept.
    pub async fn summary(&self) -> ReviewSummary {
        let distribution = self.ledger.read().await.distribution;

        let count: usize = distribution.iter().sum();
        let total: usize = distribution
            .iter()
            .enumerate()
            .map(|(stars, &reviews)| stars * reviews)
            .sum();
        let average = (count > 0).then(|| total as f64 / count as f64);

        ReviewSummary {
            count,
            average,
            distribution,
        }
    }
}
