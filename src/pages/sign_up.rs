//! Registration page. A successful registration responds with tokens, so it
//! doubles as the first sign-in.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::hook::use_session;

const MIN_PASSWORD_LEN: usize = 8;

/// Validate and normalize the registration form input.
fn validate_sign_up(
    email: &str,
    password: &str,
    confirm: &str,
    terms_accepted: bool,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    if !terms_accepted {
        return Err("You must accept the terms to create an account.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let terms_accepted = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let is_authenticated = use_session();
    let navigate = use_navigate();

    // Visitors already holding a session skip the form.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if is_authenticated.get() {
                navigate("/user/profile", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_up(
            &email.get(),
            &password.get(),
            &confirm.get(),
            terms_accepted.get(),
        ) {
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
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&email_value, &password_value).await {
                    Ok(tokens) => {
                        crate::session::lifecycle::login(&tokens.access_token, &tokens.refresh_token);
                        navigate("/user/profile", NavigateOptions::default());
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
                <h1>"Create an account"</h1>
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
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || terms_accepted.get()
                            on:change=move |ev| terms_accepted.set(event_target_checked(&ev))
                        />
                        "I agree to the terms and conditions"
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/auth/sign-in">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
