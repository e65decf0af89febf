/// In-memory implementations of the ports for driving the router without PostgreSQL
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use marquee_lib::api::{AppState, HealthProbe};
use marquee_lib::modules::movie::domain::{BoxOfficeLookup, Movie, MovieFilter, MoviePage};
use marquee_lib::modules::movie::{BoxOfficeClient, MovieRepository};
use marquee_lib::modules::rating::{RatingAggregate, RatingRepository, RatingValue};
use marquee_lib::shared::application::{CursorPage, CursorParams};
use marquee_lib::shared::errors::{AppError, AppResult};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub async fn all(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }
}

fn same_text(value: &str, wanted: &str) -> bool {
    value.to_lowercase() == wanted.to_lowercase()
}

fn filter_matches(movie: &Movie, filter: &MovieFilter) -> bool {
    let title = filter.title_contains.as_deref().map_or(true, |q| {
        movie.title.to_lowercase().contains(&q.to_lowercase())
    });
    let year = filter
        .year
        .map_or(true, |y| movie.release_date.starts_with(&format!("{:04}", y)));
    let genre = filter
        .genre
        .as_deref()
        .map_or(true, |g| same_text(&movie.genre, g));
    let distributor = filter.distributor.as_deref().map_or(true, |wanted| {
        movie
            .distributor
            .as_deref()
            .map_or(false, |d| same_text(d, wanted))
    });
    let budget = filter
        .max_budget
        .map_or(true, |max| movie.budget.map_or(false, |b| b <= max));
    let rating = filter
        .mpa_rating
        .as_ref()
        .map_or(true, |r| movie.mpa_rating.as_ref() == Some(r));

    title && year && genre && distributor && budget && rating
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, movie: &Movie) -> AppResult<()> {
        self.movies.write().await.push(movie.clone());
        Ok(())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|m| m.title == title)
            .min_by(|a, b| a.id.cmp(&b.id))
            .cloned())
    }

    async fn list(&self, filter: &MovieFilter, pagination: &CursorParams) -> AppResult<MoviePage> {
        let mut rows: Vec<Movie> = self
            .movies
            .read()
            .await
            .iter()
            .filter(|m| filter_matches(m, filter))
            .filter(|m| pagination.cursor.as_ref().map_or(true, |c| &m.id > c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(fetch) = pagination.fetch_limit() {
            rows.truncate(fetch as usize);
        }
        Ok(CursorPage::from_overfetch(rows, pagination, |m| m.id.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryRatingRepository {
    ratings: RwLock<HashMap<(String, String), f64>>,
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert(
        &self,
        movie_id: &str,
        rater_id: &str,
        rating: RatingValue,
    ) -> AppResult<bool> {
        let previous = self
            .ratings
            .write()
            .await
            .insert((movie_id.to_string(), rater_id.to_string()), rating.value());
        Ok(previous.is_none())
    }

    async fn aggregate(&self, movie_id: &str) -> AppResult<RatingAggregate> {
        let ratings = self.ratings.read().await;
        let scores: Vec<f64> = ratings
            .iter()
            .filter(|((movie, _), _)| movie == movie_id)
            .map(|(_, score)| *score)
            .collect();
        let count = scores.len() as i64;
        let average = if count == 0 {
            0.0
        } else {
            scores.iter().sum::<f64>() / count as f64
        };
        Ok(RatingAggregate::from_raw(average, count))
    }
}

/// Box-office stub: answers with the lookup, or fails like a 503 when there is none
pub struct StubBoxOfficeClient {
    lookup: Option<BoxOfficeLookup>,
}

impl StubBoxOfficeClient {
    pub fn answering(lookup: BoxOfficeLookup) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }

    pub fn unavailable() -> Self {
        Self { lookup: None }
    }
}

#[async_trait]
impl BoxOfficeClient for StubBoxOfficeClient {
    async fn fetch_box_office(&self, _title: &str) -> AppResult<BoxOfficeLookup> {
        self.lookup.clone().ok_or_else(|| {
            AppError::UpstreamError("box office service returned 503 Service Unavailable".into())
        })
    }
}

pub struct StubHealthProbe {
    pub healthy: bool,
}

#[async_trait]
impl HealthProbe for StubHealthProbe {
    async fn check(&self) -> AppResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub movies: Arc<InMemoryMovieRepository>,
    pub ratings: Arc<InMemoryRatingRepository>,
}

impl TestApp {
    pub fn new(box_office: StubBoxOfficeClient) -> Self {
        Self::with_health(box_office, true)
    }

    pub fn with_health(box_office: StubBoxOfficeClient, healthy: bool) -> Self {
        let movies = Arc::new(InMemoryMovieRepository::default());
        let ratings = Arc::new(InMemoryRatingRepository::default());
        let state = AppState::new(
            movies.clone(),
            ratings.clone(),
            Arc::new(box_office),
            Arc::new(StubHealthProbe { healthy }),
            TEST_TOKEN,
        );
        Self {
            state,
            movies,
            ratings,
        }
    }
}
