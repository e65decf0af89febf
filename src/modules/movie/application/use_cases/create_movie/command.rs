use crate::modules::movie::domain::Movie;

/// Command for creating a new movie
///
/// Title, genre and release date are already validated as non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovieCommand {
    pub title: String,
    pub genre: String,
    pub release_date: String,
    pub distributor: Option<String>,
    pub budget: Option<i64>,
    pub mpa_rating: Option<String>,
}

impl CreateMovieCommand {
    pub fn new(title: String, genre: String, release_date: String) -> Self {
        Self {
            title,
            genre,
            release_date,
            distributor: None,
            budget: None,
            mpa_rating: None,
        }
    }

    /// Movie as supplied by the caller, before any enrichment
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            release_date: self.release_date,
            genre: self.genre,
            distributor: self.distributor,
            budget: self.budget,
            mpa_rating: self.mpa_rating,
            box_office: None,
        }
    }
}
