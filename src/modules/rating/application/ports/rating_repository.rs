use async_trait::async_trait;

use crate::modules::rating::domain::{RatingAggregate, RatingValue};
use crate::shared::errors::AppResult;

/// Port for rating persistence, keyed by movie id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert or overwrite the rating for `(movie_id, rater_id)`
    ///
    /// Returns `true` when a new row was inserted, `false` when an existing one was updated.
    async fn upsert(&self, movie_id: &str, rater_id: &str, rating: RatingValue)
        -> AppResult<bool>;

    /// Average and count for one movie; `0.0` and `0` when unrated
    async fn aggregate(&self, movie_id: &str) -> AppResult<RatingAggregate>;
}
