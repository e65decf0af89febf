use std::sync::Arc;

use crate::api::health::HealthProbe;
use crate::modules::movie::application::{
    BoxOfficeClient, CreateMovieHandler, ListMoviesHandler, MovieRepository,
};
use crate::modules::rating::application::{
    GetRatingAggregateHandler, RatingRepository, SubmitRatingHandler,
};

/// Everything a request handler needs, cloned cheaply into each request
#[derive(Clone)]
pub struct AppState {
    pub create_movie: Arc<CreateMovieHandler>,
    pub list_movies: Arc<ListMoviesHandler>,
    pub submit_rating: Arc<SubmitRatingHandler>,
    pub rating_aggregate: Arc<GetRatingAggregateHandler>,
    pub health: Arc<dyn HealthProbe>,
    pub auth_token: Arc<str>,
}

impl AppState {
    /// Wire the use case handlers onto the given ports
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        rating_repository: Arc<dyn RatingRepository>,
        box_office_client: Arc<dyn BoxOfficeClient>,
        health: Arc<dyn HealthProbe>,
        auth_token: &str,
    ) -> Self {
        Self {
            create_movie: Arc::new(CreateMovieHandler::new(
                Arc::clone(&movie_repository),
                box_office_client,
            )),
            list_movies: Arc::new(ListMoviesHandler::new(Arc::clone(&movie_repository))),
            submit_rating: Arc::new(SubmitRatingHandler::new(
                Arc::clone(&movie_repository),
                Arc::clone(&rating_repository),
            )),
            rating_aggregate: Arc::new(GetRatingAggregateHandler::new(
                movie_repository,
                rating_repository,
            )),
            health,
            auth_token: Arc::from(auth_token),
        }
    }
}
