//! Helpers shared by provider implementations.

use std::time::Duration;

use reqwest::Client;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates an HTTP client with the standard timeout configuration.
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

/// Appends the trailing dot that makes a zone or record name fully qualified.
pub(crate) fn qualify_name(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

/// Strips the trailing dot for backends that use bare names.
pub(crate) fn strip_trailing_dot(name: &str) -> &str {
    name.trim_end_matches('.')
}
