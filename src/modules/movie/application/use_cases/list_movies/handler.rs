use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::movie::application::ports::MovieRepository;
use crate::modules::movie::domain::MoviePage;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::query::ListMoviesQuery;

/// Query handler for movie listings; filtering and paging live in the repository
pub struct ListMoviesHandler {
    movie_repository: Arc<dyn MovieRepository>,
}

impl ListMoviesHandler {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }
}

#[async_trait]
impl Query<ListMoviesQuery, MoviePage> for ListMoviesHandler {
    async fn execute(&self, query: ListMoviesQuery) -> AppResult<MoviePage> {
        let page = self
            .movie_repository
            .list(&query.filter, &query.pagination)
            .await?;

        log_debug!(
            "Listed {} movies (limit {}, has next page: {})",
            page.items.len(),
            query.pagination.limit,
            page.next_cursor.is_some()
        );

        Ok(page)
    }
}
