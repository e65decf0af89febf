use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::movie::application::ports::{BoxOfficeClient, MovieRepository};
use crate::modules::movie::domain::{Enrichment, MovieEnricher, MovieId};
use crate::shared::{application::use_case::UseCase, errors::AppResult};
use crate::{log_info, log_warn};

use super::{command::CreateMovieCommand, result::CreateMovieResult};

/// Use case handler for creating a movie with best-effort box-office enrichment
pub struct CreateMovieHandler {
    movie_repository: Arc<dyn MovieRepository>,
    box_office_client: Arc<dyn BoxOfficeClient>,
}

impl CreateMovieHandler {
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        box_office_client: Arc<dyn BoxOfficeClient>,
    ) -> Self {
        Self {
            movie_repository,
            box_office_client,
        }
    }

    /// Never fails: lookup errors are logged and downgraded to `Unavailable`
    async fn enrich(&self, title: &str) -> Enrichment {
        match self.box_office_client.fetch_box_office(title).await {
            Ok(lookup) => Enrichment::Enriched(lookup),
            Err(e) => {
                log_warn!("Failed to fetch box office data for '{}': {}", title, e);
                Enrichment::Unavailable
            }
        }
    }
}

#[async_trait]
impl UseCase<CreateMovieCommand, CreateMovieResult> for CreateMovieHandler {
    async fn execute(&self, command: CreateMovieCommand) -> AppResult<CreateMovieResult> {
        let draft = command.into_movie(MovieId::generate());

        let enrichment = self.enrich(&draft.title).await;
        let was_enriched = enrichment.is_enriched();
        let movie = MovieEnricher::merge(draft, enrichment, Utc::now());

        // Persistence failures propagate; only enrichment is soft
        self.movie_repository.create(&movie).await?;

        log_info!(
            "Created movie {} ('{}'), enriched: {}",
            movie.id,
            movie.title,
            was_enriched
        );

        Ok(CreateMovieResult::new(movie, was_enriched))
    }
}
