//! Account profile page with sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::hook::use_session;
use crate::session::lifecycle;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let is_authenticated = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(is_authenticated, "/user/profile", navigate.clone());

    let account = LocalResource::new(|| crate::net::api::fetch_me());

    // A 401 inside fetch_me clears the session, which trips the redirect
    // guard above; no extra handling is needed here.
    let on_logout = Callback::new(move |()| {
        lifecycle::logout();
        navigate("/auth/sign-in", NavigateOptions::default());
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"User Profile"</h1>
                <Suspense fallback=move || view! { <p class="auth-card__loading">"Loading profile..."</p> }>
                    {move || {
                        account
                            .get()
                            .map(|result| match result {
                                Ok(user) => view! {
                                    <div class="profile">
                                        <section class="profile__section">
                                            <h2>"Account Information"</h2>
                                            <p class="profile__field">"Email: " {user.email}</p>
                                        </section>
                                        <button
                                            class="btn btn--danger btn--block"
                                            on:click=move |_| on_logout.run(())
                                        >
                                            "Logout"
                                        </button>
                                    </div>
                                }
                                    .into_any(),
                                Err(error) => view! {
                                    <div class="alert alert--error">"Error: " {error.to_string()}</div>
                                }
                                    .into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
