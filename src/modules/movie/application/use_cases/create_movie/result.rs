use crate::modules::movie::domain::Movie;

/// Result of creating a movie
#[derive(Debug, Clone)]
pub struct CreateMovieResult {
    pub movie: Movie,
    pub was_enriched: bool, // false when the box-office lookup failed
}

impl CreateMovieResult {
    pub fn new(movie: Movie, was_enriched: bool) -> Self {
        Self {
            movie,
            was_enriched,
        }
    }
}
