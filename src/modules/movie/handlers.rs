use axum::extract::rejection::JsonRejection;
use axum::extract::{Query as QueryParams, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::application::{CreateMovieCommand, ListMoviesQuery};
use super::domain::{MovieFilter, MoviePage};
use crate::api::{AppState, Authorized};
use crate::log_debug;
use crate::shared::application::{Query, UseCase};
use crate::shared::errors::{ApiError, AppError};
use crate::shared::utils::validation::DEFAULT_PAGE_LIMIT;
use crate::shared::utils::Validator;

/// Raw `GET /movies` query string; every value is parsed by hand so a bad one maps to 400
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesParams {
    pub q: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub distributor: Option<String>,
    pub budget: Option<String>,
    pub mpa_rating: Option<String>,
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

// Empty query values count as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ListMoviesParams {
    pub fn into_query(self) -> Result<ListMoviesQuery, ApiError> {
        let mut filter = MovieFilter::default();

        if let Some(q) = present(self.q) {
            filter = filter.with_title(q);
        }
        if let Some(year) = present(self.year) {
            let year = year
                .parse::<i32>()
                .map_err(|_| ApiError::bad_request("Invalid year parameter"))?;
            filter = filter.with_year(year);
        }
        if let Some(genre) = present(self.genre) {
            filter = filter.with_genre(genre);
        }
        if let Some(distributor) = present(self.distributor) {
            filter = filter.with_distributor(distributor);
        }
        if let Some(budget) = present(self.budget) {
            let budget = budget
                .parse::<i64>()
                .map_err(|_| ApiError::bad_request("Invalid budget parameter"))?;
            filter = filter.with_max_budget(budget);
        }
        if let Some(rating) = present(self.mpa_rating) {
            filter = filter.with_mpa_rating(rating);
        }

        let limit = match present(self.limit) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|limit| Validator::validate_page_limit(*limit).is_ok())
                .ok_or_else(|| ApiError::bad_request("Invalid limit parameter"))?,
            None => DEFAULT_PAGE_LIMIT,
        };

        Ok(ListMoviesQuery::new(filter, limit, present(self.cursor)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub release_date: String,
    pub distributor: Option<String>,
    pub budget: Option<i64>,
    pub mpa_rating: Option<String>,
}

impl CreateMovieRequest {
    pub fn into_command(self) -> Result<CreateMovieCommand, AppError> {
        Validator::validate_required("title", &self.title)?;
        Validator::validate_required("genre", &self.genre)?;
        Validator::validate_required("releaseDate", &self.release_date)?;

        let mut command = CreateMovieCommand::new(self.title, self.genre, self.release_date);
        command.distributor = self.distributor;
        command.budget = self.budget;
        command.mpa_rating = self.mpa_rating;
        Ok(command)
    }
}

/// Map a body that failed to deserialize to 422
pub fn invalid_body(rejection: JsonRejection) -> ApiError {
    log_debug!("Rejected request body: {}", rejection.body_text());
    AppError::ValidationError("Invalid request body".to_string()).into()
}

/// `Location` value for a path built from a user-supplied title
pub fn location(path: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(path)
        .map_err(|e| AppError::InternalError(format!("Invalid Location header: {}", e)).into())
}

pub async fn list_movies(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListMoviesParams>,
) -> Result<Json<MoviePage>, ApiError> {
    let query = params.into_query()?;
    let page = state.list_movies.execute(query).await?;
    Ok(Json(page))
}

pub async fn create_movie(
    _auth: Authorized,
    State(state): State<AppState>,
    body: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(invalid_body)?;
    let command = request.into_command()?;

    let result = state.create_movie.execute(command).await?;
    let location = location(&format!(
        "/movies/{}",
        urlencoding::encode(&result.movie.title)
    ))?;

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(result.movie)))
}
