//! Wire DTOs for the client/server REST boundary.
//!
//! Field names mirror the server's JSON exactly so serde round-trips stay
//! lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token pair issued by the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token attached to authenticated requests.
    pub access_token: String,
    /// Long-lived renewal token. The server omits it on responses that do
    /// not rotate it.
    #[serde(default)]
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
}

/// The authenticated account as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Sign-in email address, also the display identity.
    pub email: String,
}

/// A published post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Headline shown in lists and on the detail page.
    pub title: String,
    /// Full body, rendered as plain text.
    pub content: String,
    /// Account that owns the post.
    pub user_id: i64,
    /// Author display name; the server omits it when unknown.
    #[serde(default)]
    pub username: Option<String>,
    /// Creation timestamp as an ISO 8601 string.
    pub created_at: String,
}

/// Error envelope the server sends for expected failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
