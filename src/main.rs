//! Greeter: a minimal HTTP greeting and health-check service.
//!
//! This is the application entry point. It initializes tracing, reads the
//! listen port from the environment, sets up the Axum router with both
//! routes, and runs the HTTP server until it fails or the process is killed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{Config, DEFAULT_LOG_FILTER};
use greeter::routes::create_router;
use greeter::server::start_server;

#[tokio::main]
async fn main() {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from the environment
    let config = Config::from_env();
    tracing::info!(port = %config.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server; a bind or serve failure is fatal, not retried
    if let Err(err) = start_server(app, &config).await {
        tracing::error!(error = %err, "Server failed");
        std::process::exit(1);
    }
}
