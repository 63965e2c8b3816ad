//! Greeter: a minimal HTTP greeting and health-check service.
//!
//! Exposes two endpoints: `/hello`, which greets the caller by the optional
//! `name` query parameter, and `/health`, a liveness probe. The listen port
//! is read from the `PORT` environment variable at startup.

pub mod config;
pub mod routes;
pub mod server;
