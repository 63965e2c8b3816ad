//! Configuration loading and constants.
//!
//! The only configuration surface is the process environment: `PORT` selects
//! the TCP port to listen on, defaulting to `"8080"` when unset or empty.
//! `Config` is the root configuration struct passed to the server.

/// Environment variable holding the TCP port to listen on
pub const PORT_ENV: &str = "PORT";

/// Default port when the environment variable is unset or empty
pub const DEFAULT_PORT: &str = "8080";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug,tower_http=debug";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on, kept as a string as supplied by the environment
    pub port: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(std::env::var(PORT_ENV).ok()),
        }
    }

    /// The socket address string to bind, listening on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Resolves the port value: unset and empty both fall back to the default.
fn resolve_port(raw: Option<String>) -> String {
    match raw {
        Some(port) if !port.is_empty() => port,
        _ => DEFAULT_PORT.to_string(),
    }
}
