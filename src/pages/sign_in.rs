//! Sign-in page with email + password authentication.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::hook::use_session;

/// Validate and normalize the sign-in form input.
fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to land after a successful sign-in.
///
/// Guarded pages arrive with a `redirect` query parameter pointing back at
/// themselves; direct visitors go to the profile page.
fn post_sign_in_target(redirect: Option<String>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') => path,
        _ => "/user/profile".to_owned(),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let is_authenticated = use_session();
    let query = use_query_map();
    let navigate = use_navigate();

    // Visitors already holding a session skip the form.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if is_authenticated.get() {
                let target = post_sign_in_target(query.get_untracked().get("redirect"));
                navigate(&target, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let target = post_sign_in_target(query.get_untracked().get("redirect"));
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(tokens) => {
                        crate::session::lifecycle::login(&tokens.access_token, &tokens.refresh_token);
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="auth-form__row">
                        <a class="auth-form__link" href="/auth/forgot-password">
                            "Forgot your password?"
                        </a>
                    </div>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/auth/sign-up">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
