//! Client-side session management.
//!
//! SYSTEM CONTEXT
//! ==============
//! All reads and writes of the persisted token pair go through this module:
//! `credentials` owns the storage slots, `bus` carries change notifications
//! within a tab (and receives the browser's cross-tab storage signal), and
//! `hook` exposes the reactive is-authenticated view that pages and
//! components consume. `lifecycle` couples store writes to notification so
//! sign-in, sign-out and rejected-token paths stay consistent.

pub mod bus;
pub mod credentials;
pub mod hook;
pub mod lifecycle;
