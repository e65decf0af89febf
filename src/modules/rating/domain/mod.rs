pub mod entities;
pub mod value_objects;

pub use entities::{Rating, RatingAggregate};
pub use value_objects::RatingValue;
