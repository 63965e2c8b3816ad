//! Greeting endpoint.

use axum::extract::Query;
use serde::Deserialize;

/// Query parameters accepted by the greeting endpoint.
#[derive(Debug, Deserialize)]
pub struct HelloParams {
    name: Option<String>,
}

/// Greeting handler.
///
/// Greets the caller by the `name` query parameter, falling back to "World"
/// when the parameter is absent or empty. The value is embedded verbatim:
/// the response is plain text, so no escaping is applied.
pub async fn hello(Query(params): Query<HelloParams>) -> String {
    let name = params
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "World".to_string());

    format!("Hello, {}!\n", name)
}
