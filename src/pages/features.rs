//! Features overview page.

use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="page content-page">
            <h1>"Features"</h1>
            <div class="feature-grid">
                <section class="feature">
                    <h2>"Token-based sign-in"</h2>
                    <p>
                        "Email and password exchange for an access and refresh token pair. \
                         The access token authorizes API calls; no cookies are involved."
                    </p>
                </section>
                <section class="feature">
                    <h2>"Multi-tab sessions"</h2>
                    <p>
                        "Signing in or out in one tab is reflected in every other open tab \
                         without a reload."
                    </p>
                </section>
                <section class="feature">
                    <h2>"Post management"</h2>
                    <p>
                        "A public post index, a personal dashboard, and full create, edit \
                         and delete flows for your own posts."
                    </p>
                </section>
                <section class="feature">
                    <h2>"Graceful degradation"</h2>
                    <p>
                        "An expired or rejected token never breaks a page: you are simply \
                         returned to the sign-in screen with your destination remembered."
                    </p>
                </section>
            </div>
        </div>
    }
}
