pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{BoxOffice, Movie, MoviePage, Revenue};
pub use services::{BoxOfficeLookup, Enrichment, MovieEnricher};
pub use value_objects::{MovieFilter, MovieId};
