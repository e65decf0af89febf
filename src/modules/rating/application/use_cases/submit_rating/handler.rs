use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::movie::application::ports::MovieRepository;
use crate::modules::rating::application::ports::RatingRepository;
use crate::modules::rating::domain::Rating;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
};

use super::{command::SubmitRatingCommand, result::SubmitRatingResult};

/// Use case handler for creating or replacing a rater's score for a movie
pub struct SubmitRatingHandler {
    movie_repository: Arc<dyn MovieRepository>,
    rating_repository: Arc<dyn RatingRepository>,
}

impl SubmitRatingHandler {
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
impl UseCase<SubmitRatingCommand, SubmitRatingResult> for SubmitRatingHandler {
    async fn execute(&self, command: SubmitRatingCommand) -> AppResult<SubmitRatingResult> {
        let movie = self
            .movie_repository
            .find_by_title(&command.movie_title)
            .await?
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        let is_new = self
            .rating_repository
            .upsert(&movie.id, &command.rater_id, command.rating)
            .await?;

        log_info!(
            "Rating {} for movie {} by '{}' ({})",
            command.rating.value(),
            movie.id,
            command.rater_id,
            if is_new { "new" } else { "updated" }
        );

        let rating = Rating::new(movie.title, command.rater_id, command.rating);
        Ok(SubmitRatingResult::new(rating, is_new))
    }
}
