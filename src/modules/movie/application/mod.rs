pub mod ports;
pub mod use_cases;

pub use ports::{BoxOfficeClient, MovieRepository};
pub use use_cases::{
    CreateMovieCommand, CreateMovieHandler, CreateMovieResult, ListMoviesHandler,
    ListMoviesQuery,
};
