//! Public posts index.

use leptos::prelude::*;

use crate::components::post_list::{PostList, PostSource};

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <div class="page posts-page">
            <header class="page__header">
                <h1>"All Posts"</h1>
                <a class="btn btn--primary" href="/posts/create">"Create New Post"</a>
            </header>
            <PostList source=PostSource::All/>
        </div>
    }
}
