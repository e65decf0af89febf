pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{BoxOfficeClient, MovieRepository};
pub use domain::{BoxOffice, Movie, MovieFilter, MoviePage, Revenue};
pub use infrastructure::{BoxOfficeHttpClient, MovieRepositoryImpl};
