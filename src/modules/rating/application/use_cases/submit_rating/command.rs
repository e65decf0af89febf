use crate::modules::rating::domain::RatingValue;

/// Command for rating a movie on behalf of one rater
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRatingCommand {
    pub movie_title: String,
    pub rater_id: String,
    pub rating: RatingValue,
}

impl SubmitRatingCommand {
    pub fn new(movie_title: String, rater_id: String, rating: RatingValue) -> Self {
        Self {
            movie_title,
            rater_id,
            rating,
        }
    }
}
