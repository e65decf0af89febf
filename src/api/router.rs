use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::health::health_check;
use crate::api::middleware::log_requests;
use crate::api::AppState;
use crate::modules::movie::handlers as movies;
use crate::modules::rating::handlers as ratings;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-rater-id"),
        ])
        .max_age(Duration::from_secs(3600))
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        // Movies
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        // Ratings
        .route("/movies/:title/ratings", post(ratings::submit_rating))
        .route("/movies/:title/rating", get(ratings::get_rating_aggregate))
        .layer(from_fn(log_requests))
        .layer(cors_layer())
        .with_state(state)
}
