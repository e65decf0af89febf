pub mod api;
pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use api::{build_router, AppState, DatabaseHealthProbe};
use modules::movie::{BoxOfficeClient, BoxOfficeHttpClient, MovieRepository, MovieRepositoryImpl};
use modules::rating::{RatingRepository, RatingRepositoryImpl};
use shared::errors::AppResult;
use shared::{AppConfig, Database};

/// Wire the diesel repositories and the box-office client into the HTTP state
pub fn build_state(config: &AppConfig, database: Arc<Database>) -> AppResult<AppState> {
    let movie_repository: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
    let rating_repository: Arc<dyn RatingRepository> =
        Arc::new(RatingRepositoryImpl::new(Arc::clone(&database)));
    let box_office_client: Arc<dyn BoxOfficeClient> = Arc::new(BoxOfficeHttpClient::new(
        config.box_office_url.as_str(),
        config.box_office_api_key.as_str(),
    )?);
    let health = Arc::new(DatabaseHealthProbe::new(database));

    Ok(AppState::new(
        movie_repository,
        rating_repository,
        box_office_client,
        health,
        &config.auth_token,
    ))
}

/// Connect, migrate and serve until Ctrl+C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let database =
        Arc::new(Database::new(&config.database_url).context("connecting to database")?);
    database
        .run_migrations()
        .context("running database migrations")?;

    let state = build_state(&config, database)?;
    let router = build_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;
    log_info!("Server starting on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    log_info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log_info!("Shutdown signal received");
}
