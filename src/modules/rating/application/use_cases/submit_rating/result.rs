use crate::modules::rating::domain::Rating;

/// Result of submitting a rating
#[derive(Debug, Clone)]
pub struct SubmitRatingResult {
    pub rating: Rating,
    pub is_new: bool, // false when an earlier rating by the same rater was overwritten
}

impl SubmitRatingResult {
    pub fn new(rating: Rating, is_new: bool) -> Self {
        Self { rating, is_new }
    }
}
