//! Health check endpoint.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by load balancers and orchestrators to verify the service
//! is alive.

use axum::http::StatusCode;

/// Health check handler.
///
/// Ignores the request entirely and returns an explicit 200 with body "OK".
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
