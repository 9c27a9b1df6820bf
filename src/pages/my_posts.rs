//! The signed-in account's posts, with edit and delete actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::post_list::{PostList, PostSource};
use crate::session::hook::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn MyPostsPage() -> impl IntoView {
    let is_authenticated = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(is_authenticated, "/posts/my-posts", navigate);

    view! {
        <div class="page posts-page">
            <header class="page__header">
                <h1>"My Posts"</h1>
                <a class="btn btn--primary" href="/posts/create">"Create New Post"</a>
            </header>
            <PostList
                source=PostSource::Mine
                empty_message="You haven't written any posts yet"
                show_actions=true
            />
        </div>
    }
}
