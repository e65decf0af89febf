use std::time::Instant;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::AppState;
use crate::shared::errors::{ApiError, AppError};
use crate::{log_debug, log_info};

pub const RATER_ID_HEADER: &str = "X-Rater-Id";

/// Proof that the request carried `Authorization: Bearer <AUTH_TOKEN>`
///
/// Missing header is 401, any other value is 403.
#[derive(Debug, Clone, Copy)]
pub struct Authorized;

#[async_trait]
impl FromRequestParts<AppState> for Authorized {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) if !value.is_empty() => value,
            _ => {
                let err = AppError::Unauthorized("Missing authorization header".to_string());
                return Err(err.into());
            }
        };

        let expected = format!("Bearer {}", state.auth_token);
        if header.as_bytes() != expected.as_bytes() {
            log_debug!("Rejected request with invalid bearer token");
            return Err(AppError::Forbidden("Invalid authorization token".to_string()).into());
        }

        Ok(Authorized)
    }
}

/// Opaque rater identity taken from the `X-Rater-Id` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaterId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RaterId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(RATER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .map(|value| RaterId(value.to_string()))
            .ok_or_else(|| AppError::Unauthorized("Missing X-Rater-Id header".to_string()).into())
    }
}

/// Logs every request on entry and on completion
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    log_info!("{} {}", method, path);
    let response = next.run(request).await;
    log_info!(
        "{} {} completed with {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    response
}
