use crate::log_warn;
use crate::shared::errors::{AppError, AppResult};
use std::env;

pub const DEFAULT_PORT: u16 = 8080;

/// Runtime settings, read from the process environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub auth_token: String,
    pub database_url: String,
    pub box_office_url: String,
    pub box_office_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                log_warn!("Invalid PORT '{}', falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let auth_token = get("AUTH_TOKEN")
            .ok_or_else(|| AppError::ConfigError("AUTH_TOKEN must be set".to_string()))?;

        let database_url = get("DB_URL").or_else(|| get("DATABASE_URL")).ok_or_else(|| {
            AppError::ConfigError("DB_URL (or DATABASE_URL) must be set".to_string())
        })?;
        Self::validate_database_url(&database_url)?;

        let box_office_url = get("BOXOFFICE_URL")
            .ok_or_else(|| AppError::ConfigError("BOXOFFICE_URL must be set".to_string()))?;

        Ok(Self {
            port,
            auth_token,
            database_url,
            box_office_url: box_office_url.trim_end_matches('/').to_string(),
            box_office_api_key: get("BOXOFFICE_API_KEY").unwrap_or_default(),
        })
    }

    fn validate_database_url(url: &str) -> AppResult<()> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
