pub mod external;
pub mod models;
pub mod persistence;

pub use external::BoxOfficeHttpClient;
pub use persistence::MovieRepositoryImpl;
