//! Typed failure surface for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorBody;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the access token (HTTP 401).
    #[error("not signed in")]
    Unauthorized,
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-OK response to an error from its status and raw body.
    ///
    /// Expected failures arrive as a JSON `{ "message": ... }` envelope;
    /// anything else falls back to the raw body, then to the bare status.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body).map_or_else(
            |_| {
                let raw = body.trim();
                if raw.is_empty() {
                    format!("request failed: {status}")
                } else {
                    raw.to_owned()
                }
            },
            |envelope| envelope.message,
        );
        Self::Server { status, message }
    }
}
