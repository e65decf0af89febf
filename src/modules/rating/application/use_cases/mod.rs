pub mod get_rating_aggregate;
pub mod submit_rating;

pub use get_rating_aggregate::{GetRatingAggregateHandler, GetRatingAggregateQuery};
pub use submit_rating::{SubmitRatingCommand, SubmitRatingHandler, SubmitRatingResult};
