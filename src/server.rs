//! HTTP server startup logic.
//!
//! Binds the listener and runs the serve loop. There is no graceful
//! shutdown path: the server runs until it fails or the process is killed.

use std::net::SocketAddr;

use axum::Router;

use crate::config::Config;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server on the configured port.
///
/// This function blocks until the serve loop fails. Callers treat any
/// returned error as fatal.
pub async fn start_server(app: Router, config: &Config) -> Result<(), ServerError> {
    let addr: SocketAddr = config.bind_addr().parse().map_err(ServerError::Addr)?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;

    #[tokio::test]
    async fn bind_failure_is_reported() {
        // Hold a port, then try to start the server on the same one.
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = Config {
            port: port.to_string(),
        };

        // 0.0.0.0 overlaps the held 127.0.0.1 binding on the same port.
        let result = start_server(create_router(), &config).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }

    #[tokio::test]
    async fn invalid_port_is_reported() {
        let config = Config {
            port: "not-a-port".to_string(),
        };
        let result = start_server(create_router(), &config).await;
        assert!(matches!(result, Err(ServerError::Addr(_))));
    }
}
