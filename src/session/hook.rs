//! Reactive is-authenticated view for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the navbar and auth pages all derive their rendering from
//! this one boolean. The value is recomputed from the credential store on
//! every bus notification; it is never cached across component lifetimes.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use leptos::prelude::*;

use super::{bus, credentials};

/// Subscribe the calling component to session-state changes.
///
/// Seeds the signal with one synchronous store read, so a component mounted
/// after a write reports the correct state even though it missed the
/// notification. The subscription is released when the component is
/// disposed. Storage failures read as signed out; this never panics the
/// rendering it drives.
pub fn use_session() -> ReadSignal<bool> {
    let (is_authenticated, set_is_authenticated) = signal(credentials::has_access_token());

    let subscription = bus::subscribe(move || {
        let now = credentials::has_access_token();
        // Skip redundant writes so views only rerun on real transitions.
        if is_authenticated.get_untracked() != now {
            set_is_authenticated.set(now);
        }
    });
    on_cleanup(move || subscription.unsubscribe());

    is_authenticated
}
