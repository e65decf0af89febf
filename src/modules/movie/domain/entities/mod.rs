pub mod movie;

pub use movie::{BoxOffice, Movie, MoviePage, Revenue};
