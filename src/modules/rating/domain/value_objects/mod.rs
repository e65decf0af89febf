pub mod rating_value;

pub use rating_value::RatingValue;
