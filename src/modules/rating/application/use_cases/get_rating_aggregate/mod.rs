mod handler;
mod query;

pub use handler::GetRatingAggregateHandler;
pub use query::GetRatingAggregateQuery;
