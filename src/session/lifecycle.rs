//! Session lifecycle transitions.
//!
//! Every path that establishes or destroys a session goes through these two
//! functions so the token pair is always written or cleared together and a
//! notification always follows the write.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use super::{bus, credentials};

/// Establish a session from a token pair and notify subscribers.
///
/// Called with the response of a successful login or registration.
pub fn login(access_token: &str, refresh_token: &str) {
    credentials::set(access_token, refresh_token);
    bus::publish();
}

/// Destroy the current session and notify subscribers.
///
/// Called on explicit sign-out and whenever the API rejects the access
/// token. Idempotent: clearing an empty store still notifies, which is
/// harmless because subscribers re-read the store.
pub fn logout() {
    credentials::clear();
    bus::publish();
}
