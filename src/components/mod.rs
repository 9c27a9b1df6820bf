//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and listings while deriving their
//! session-dependent behavior from the `session` module's reactive hook.

pub mod navbar;
pub mod post_list;
