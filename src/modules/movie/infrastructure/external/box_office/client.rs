use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::dto::BoxOfficeResponse;
use crate::log_warn;
use crate::modules::movie::application::ports::BoxOfficeClient;
use crate::modules::movie::domain::BoxOfficeLookup;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const API_KEY_HEADER: &str = "X-API-Key";
const SERVICE_NAME: &str = "BoxOffice";

/// REST adapter for the box-office service
///
/// One attempt per lookup, no retries. Every failure mode (transport, timeout,
/// non-2xx status, undecodable body) surfaces as `AppError::UpstreamError`.
pub struct BoxOfficeHttpClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl BoxOfficeHttpClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http_client, base_url, api_key))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn lookup_url(&self, title: &str) -> String {
        format!(
            "{}/boxoffice?title={}",
            self.base_url,
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl BoxOfficeClient for BoxOfficeHttpClient {
    async fn fetch_box_office(&self, title: &str) -> AppResult<BoxOfficeLookup> {
        let url = self.lookup_url(title);
        LogContext::api_call(SERVICE_NAME, "/boxoffice", "started", None);
        let started = Instant::now();

        let response = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let elapsed = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log_warn!(
                "BoxOffice: lookup for '{}' returned {} after {}ms",
                title,
                status,
                elapsed
            );
            return Err(AppError::UpstreamError(format!(
                "box office service returned {}: {}",
                status,
                body.trim()
            )));
        }

        let payload: BoxOfficeResponse = response.json().await.map_err(|e| {
            AppError::UpstreamError(format!("Failed to decode box office response: {}", e))
        })?;

        LogContext::api_call(SERVICE_NAME, "/boxoffice", status.as_str(), Some(elapsed));
        Ok(payload.into())
    }
}
