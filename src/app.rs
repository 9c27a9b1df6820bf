//! Root application component with routing and shared chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    docs::DocsPage, features::FeaturesPage, forgot_password::ForgotPasswordPage, home::HomePage,
    my_posts::MyPostsPage, post_create::PostCreatePage, post_detail::PostDetailPage,
    post_edit::PostEditPage, posts::PostsPage, profile::ProfilePage, sign_in::SignInPage,
    sign_up::SignUpPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The navbar sits outside the route outlet so every screen shares the same
/// session-aware chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/authwrap.css"/>
        <Title text="Auth Wrapper"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("create")) view=PostCreatePage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("my-posts")) view=MyPostsPage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailPage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("edit")) view=PostEditPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("sign-in")) view=SignInPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("sign-up")) view=SignUpPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("forgot-password")) view=ForgotPasswordPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("profile")) view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
