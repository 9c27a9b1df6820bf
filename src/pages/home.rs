//! Landing page.

use leptos::prelude::*;

use crate::session::hook::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let is_authenticated = use_session();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Auth Wrapper"</h1>
                <p class="hero__tagline">
                    "A small content platform with token-based sign-in. Write posts, \
                     manage them from any tab, and stay signed in across page loads."
                </p>
                <div class="hero__actions">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/auth/sign-up">"Get started"</a>
                                <a class="btn btn--outline" href="/posts">"Browse posts"</a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/posts/create">"Write a post"</a>
                        <a class="btn btn--outline" href="/posts/my-posts">"My posts"</a>
                    </Show>
                </div>
            </section>
            <section class="home-page__highlights">
                <div class="highlight">
                    <h2>"Stay signed in"</h2>
                    <p>"Your session survives reloads and is shared across every open tab."</p>
                </div>
                <div class="highlight">
                    <h2>"Own your posts"</h2>
                    <p>"Create, edit and delete your writing from a single dashboard."</p>
                </div>
                <div class="highlight">
                    <h2>"Read anywhere"</h2>
                    <p>"The post index is public; signing in only unlocks writing."</p>
                </div>
            </section>
        </div>
    }
}
