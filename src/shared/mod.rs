// Shared Kernel
// Cross-cutting pieces used by the movie and rating bounded contexts

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool, migrations)
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::database::Database;
