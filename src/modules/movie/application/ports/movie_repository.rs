use async_trait::async_trait;

use crate::modules::movie::domain::{Movie, MoviePage, MovieFilter};
use crate::shared::{application::CursorParams, errors::AppResult};

/// Port (interface) for movie persistence following Hexagonal Architecture
/// Infrastructure provides the diesel-backed implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persist a movie and its box office (if any) as one atomic unit
    async fn create(&self, movie: &Movie) -> AppResult<()>;

    /// Find a movie by exact title, box office included
    ///
    /// `Ok(None)` when nothing matches. With duplicate titles the lowest id wins.
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>>;

    /// Keyset-paginated listing ordered by id ascending
    async fn list(&self, filter: &MovieFilter, pagination: &CursorParams) -> AppResult<MoviePage>;
}
