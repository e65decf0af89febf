use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::prelude::*;
use serde_json::json;
use tokio::task;

use crate::api::AppState;
use crate::log_debug;
use crate::shared::errors::{ApiError, AppResult};
use crate::shared::Database;

/// Liveness check for the service's dependencies
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> AppResult<()>;
}

/// Probe that round-trips a trivial query through the connection pool
pub struct DatabaseHealthProbe {
    db: Arc<Database>,
}

impl DatabaseHealthProbe {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthProbe for DatabaseHealthProbe {
    async fn check(&self) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::sql_query("SELECT 1").execute(&mut conn)?;

            let status = db.pool_status();
            log_debug!(
                "Pool: {} connections, {} idle, max {}",
                status.connections,
                status.idle_connections,
                status.max_size
            );
            Ok(())
        })
        .await?
    }
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.health.check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e) => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            format!("Database unavailable: {}", e),
        )
        .into_response(),
    }
}
