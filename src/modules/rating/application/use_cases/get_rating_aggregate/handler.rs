use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::movie::application::ports::MovieRepository;
use crate::modules::rating::application::ports::RatingRepository;
use crate::modules::rating::domain::RatingAggregate;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetRatingAggregateQuery;

pub struct GetRatingAggregateHandler {
    movie_repository: Arc<dyn MovieRepository>,
    rating_repository: Arc<dyn RatingRepository>,
}

impl GetRatingAggregateHandler {
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        rating_repository: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            movie_repository,
            rating_repository,
        }
    }
}

#[async_trait]
impl Query<GetRatingAggregateQuery, RatingAggregate> for GetRatingAggregateHandler {
    async fn execute(&self, query: GetRatingAggregateQuery) -> AppResult<RatingAggregate> {
        let movie = self
            .movie_repository
            .find_by_title(&query.movie_title)
            .await?
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        self.rating_repository.aggregate(&movie.id).await
    }
}
