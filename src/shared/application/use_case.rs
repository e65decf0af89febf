use crate::shared::errors::AppResult;
/// Base traits for use cases following the CQRS split
///
/// Every workflow in the crate is a handler object holding its ports as
/// `Arc<dyn Trait>` and implementing one of these traits.
///
/// # Example
///
/// ```rust,ignore
/// struct SubmitRatingHandler {
///     movie_repository: Arc<dyn MovieRepository>,
///     rating_repository: Arc<dyn RatingRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<SubmitRatingCommand, SubmitRatingResult> for SubmitRatingHandler {
///     async fn execute(&self, command: SubmitRatingCommand) -> AppResult<SubmitRatingResult> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult>: Send + Sync {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult>: Send + Sync {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
