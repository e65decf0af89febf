pub mod rating;
pub mod rating_aggregate;

pub use rating::Rating;
pub use rating_aggregate::RatingAggregate;
