pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

pub use application::RatingRepository;
pub use domain::{Rating, RatingAggregate, RatingValue};
pub use infrastructure::RatingRepositoryImpl;
