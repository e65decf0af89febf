pub mod movie_filter;
pub mod movie_id;

pub use movie_filter::MovieFilter;
pub use movie_id::MovieId;
