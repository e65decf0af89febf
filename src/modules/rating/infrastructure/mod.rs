pub mod persistence;

pub use persistence::RatingRepositoryImpl;
