//! HTTP route handlers.
//!
//! The router is constructed explicitly and handed to the server, rather
//! than registering handlers against any process-wide routing table. Both
//! routes match any method, dispatching on path alone; unmatched paths fall
//! through to the framework's default 404.

pub mod health;
pub mod hello;

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with both routes and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/hello", any(hello::hello))
        .route("/health", any(health::health))
        .layer(TraceLayer::new_for_http())
}
