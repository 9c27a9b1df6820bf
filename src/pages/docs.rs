//! Documentation page describing the app and its API surface.

use leptos::prelude::*;

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <div class="page content-page">
            <h1>"Documentation"</h1>
            <section class="docs-section">
                <h2>"Getting started"</h2>
                <p>
                    "Create an account on the sign-up page. Registration signs you in \
                     immediately; the issued tokens are kept in your browser and sent as a \
                     bearer header on authenticated requests."
                </p>
            </section>
            <section class="docs-section">
                <h2>"Sessions"</h2>
                <p>
                    "You stay signed in until you log out or the server rejects your \
                     token. Both events return you to the sign-in page, and both are \
                     reflected in every open tab."
                </p>
            </section>
            <section class="docs-section">
                <h2>"API endpoints"</h2>
                <ul class="docs-endpoints">
                    <li><code>"POST /api/auth/register"</code>": create an account, returns tokens"</li>
                    <li><code>"POST /api/auth/login"</code>": exchange credentials for tokens"</li>
                    <li><code>"POST /api/auth/forgot-password"</code>": request reset instructions"</li>
                    <li><code>"GET /api/auth/me"</code>": the signed-in account"</li>
                    <li><code>"GET /api/posts"</code>": public post index"</li>
                    <li><code>"GET /api/posts/me"</code>": your posts"</li>
                    <li><code>"POST /api/posts"</code>", "<code>"PUT /api/posts/:id"</code>", "
                        <code>"DELETE /api/posts/:id"</code>": manage your posts"</li>
                </ul>
            </section>
        </div>
    }
}
