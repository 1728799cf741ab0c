//! Application startup and lifecycle management.
//!
//! Binds the listener for the configured address and serves the HTTP
//! router until the process is stopped. There is no cross-request state.

use crate::config::Settings;
use crate::handlers::{health_check, metrics, root};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::request_id_middleware;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the HTTP router with all routes and ambient layers.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    /// Bind the listener for the configured address (port 0 = random port
    /// for testing).
    pub async fn build(settings: &Settings) -> Result<Self, AppError> {
        let addr = settings.server.address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::BindError { addr, source: e }
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the HTTP server until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, build_router()).await
    }
}
