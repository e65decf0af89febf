/// Query for the rating summary of a movie, looked up by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRatingAggregateQuery {
    pub movie_title: String,
}

impl GetRatingAggregateQuery {
    pub fn new(movie_title: impl Into<String>) -> Self {
        Self {
            movie_title: movie_title.into(),
        }
    }
}
