//! Top navigation bar with session-aware account links.
//!
//! The right-hand side is the most visible consumer of the session hook:
//! it flips between Login/Register and Profile/My Posts the moment the
//! session changes, in this tab or another.

use leptos::prelude::*;

use crate::session::hook::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let is_authenticated = use_session();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">"Auth Wrapper"</a>
                <div class="navbar__links">
                    <a href="/">"Home"</a>
                    <a href="/features">"Features"</a>
                    <a href="/docs">"Docs"</a>
                    <a href="/posts">"Posts"</a>
                </div>
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| {
                        view! {
                            <div class="navbar__actions">
                                <a class="btn btn--outline" href="/auth/sign-in">"Login"</a>
                                <a class="btn btn--primary" href="/auth/sign-up">"Register"</a>
                            </div>
                        }
                    }
                >
                    <div class="navbar__actions">
                        <a class="btn btn--primary" href="/user/profile">"Profile"</a>
                        <a class="btn btn--outline" href="/posts/my-posts">"My Posts"</a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
