pub mod create_movie;
pub mod list_movies;

pub use create_movie::{CreateMovieCommand, CreateMovieHandler, CreateMovieResult};
pub use list_movies::{ListMoviesHandler, ListMoviesQuery};
