//! Password-reset request page.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

/// Validate and normalize the reset-request email.
fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => sent.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || sent.get()
                    fallback=move || view! {
                        <div>
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
                                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending..." } else { "Send reset instructions" }}
                                </button>
                            </form>
                        </div>
                    }
                >
                    <div class="alert alert--success">
                        "If an account exists with this email, we've sent password reset instructions."
                    </div>
                </Show>
                <p class="auth-card__footer">
                    <a href="/auth/sign-in">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
