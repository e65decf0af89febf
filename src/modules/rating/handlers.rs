use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::application::{GetRatingAggregateQuery, SubmitRatingCommand};
use super::domain::{RatingAggregate, RatingValue};
use crate::api::{AppState, RaterId};
use crate::modules::movie::handlers::{invalid_body, location};
use crate::shared::application::{Query, UseCase};
use crate::shared::errors::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRatingRequest {
    pub rating: f64,
}

/// 201 with `Location` for a first rating, 200 when an earlier one was replaced
pub async fn submit_rating(
    RaterId(rater_id): RaterId,
    State(state): State<AppState>,
    Path(title): Path<String>,
    body: Result<Json<SubmitRatingRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body.map_err(invalid_body)?;
    let rating = RatingValue::try_from(request.rating)?;

    let command = SubmitRatingCommand::new(title, rater_id, rating);
    let result = state.submit_rating.execute(command).await?;

    if result.is_new {
        let location = location(&format!(
            "/movies/{}/ratings",
            urlencoding::encode(&result.rating.movie_title)
        ))?;
        Ok((StatusCode::CREATED, [(LOCATION, location)], Json(result.rating)).into_response())
    } else {
        Ok((StatusCode::OK, Json(result.rating)).into_response())
    }
}

pub async fn get_rating_aggregate(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<RatingAggregate>, ApiError> {
    let aggregate = state
        .rating_aggregate
        .execute(GetRatingAggregateQuery::new(title))
        .await?;
    Ok(Json(aggregate))
}
