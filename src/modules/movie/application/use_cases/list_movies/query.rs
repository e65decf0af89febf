use crate::modules::movie::domain::MovieFilter;
use crate::shared::application::CursorParams;

/// Query for listing movies with filters and cursor pagination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMoviesQuery {
    pub filter: MovieFilter,
    pub pagination: CursorParams,
}

impl ListMoviesQuery {
    pub fn new(filter: MovieFilter, limit: i64, cursor: Option<String>) -> Self {
        Self {
            filter,
            pagination: CursorParams::new(limit, cursor),
        }
    }
}
