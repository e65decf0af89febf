use serde::{Deserialize, Serialize};

use crate::modules::rating::domain::value_objects::RatingValue;

/// A rater's score for one movie, as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub movie_title: String,
    pub rater_id: String,
    pub rating: RatingValue,
}

impl Rating {
    pub fn new(
        movie_title: impl Into<String>,
        rater_id: impl Into<String>,
        rating: RatingValue,
    ) -> Self {
        Self {
            movie_title: movie_title.into(),
            rater_id: rater_id.into(),
            rating,
        }
    }
}
