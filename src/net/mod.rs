//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema shared
//! with the server, and `error` is the typed failure surface pages consume.

pub mod api;
pub mod error;
pub mod types;
