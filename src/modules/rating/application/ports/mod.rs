pub mod rating_repository;

pub use rating_repository::RatingRepository;

#[cfg(test)]
pub use rating_repository::MockRatingRepository;
