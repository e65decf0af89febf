pub mod box_office_client;
pub mod movie_repository;

pub use box_office_client::BoxOfficeClient;
pub use movie_repository::MovieRepository;

#[cfg(test)]
pub use box_office_client::MockBoxOfficeClient;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
