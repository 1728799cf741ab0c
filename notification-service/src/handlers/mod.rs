//! HTTP handlers for notification-service.
//!
//! The service exposes only infrastructure endpoints: a liveness probe,
//! service metadata, and the Prometheus metrics exposition.

pub mod health;
pub mod metrics;
pub mod root;

pub use health::health_check;
pub use metrics::metrics;
pub use root::root;
