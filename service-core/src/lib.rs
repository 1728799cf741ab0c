//! service-core: Shared infrastructure for the notification microservice.
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use serde;
pub use tokio;
pub use tracing;
