mod handler;
mod query;

pub use handler::ListMoviesHandler;
pub use query::ListMoviesQuery;
