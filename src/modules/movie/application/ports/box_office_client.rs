use async_trait::async_trait;

use crate::modules::movie::domain::BoxOfficeLookup;
use crate::shared::errors::AppResult;

/// Port for the external box-office service
///
/// Implementations make a single attempt; failures surface as `AppError::UpstreamError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoxOfficeClient: Send + Sync {
    async fn fetch_box_office(&self, title: &str) -> AppResult<BoxOfficeLookup>;
}
