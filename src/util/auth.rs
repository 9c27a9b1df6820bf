//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components should apply identical unauthenticated
//! redirect behavior, including the return path for after sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Sign-in URL carrying the path to return to after authentication.
pub fn sign_in_path(redirect_to: &str) -> String {
    if redirect_to.is_empty() || redirect_to == "/" {
        "/auth/sign-in".to_owned()
    } else {
        format!("/auth/sign-in?redirect={redirect_to}")
    }
}

/// Redirect to the sign-in page whenever the session reads as signed out.
///
/// Reacts to mid-visit sign-outs too (another tab clearing the store), not
/// just the initial mount.
pub fn install_unauth_redirect<F>(
    is_authenticated: ReadSignal<bool>,
    redirect_to: impl Into<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let redirect_to = redirect_to.into();
    Effect::new(move || {
        if !is_authenticated.get() {
            navigate(&sign_in_path(&redirect_to), NavigateOptions::default());
        }
    });
}
