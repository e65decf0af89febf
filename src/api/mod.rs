//! HTTP boundary: router, request extractors and health check.

pub mod health;
pub mod middleware;
pub mod router;
pub mod state;

pub use health::{DatabaseHealthProbe, HealthProbe};
pub use middleware::{Authorized, RaterId};
pub use router::build_router;
pub use state::AppState;
