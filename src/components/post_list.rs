//! Shared post listing for the public index and the my-posts screen.

#[cfg(test)]
#[path = "post_list_test.rs"]
mod post_list_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Post;
use crate::util::date::display_date;

/// Which listing a [`PostList`] shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostSource {
    /// Every published post (`GET /api/posts`).
    All,
    /// Only the signed-in account's posts (`GET /api/posts/me`).
    Mine,
}

impl PostSource {
    /// Path a deletion's sign-in redirect should return to.
    fn return_path(self) -> &'static str {
        match self {
            Self::All => "/posts",
            Self::Mine => "/posts/my-posts",
        }
    }
}

async fn fetch(source: PostSource) -> Result<Vec<Post>, ApiError> {
    match source {
        PostSource::All => api::fetch_posts().await,
        PostSource::Mine => api::fetch_my_posts().await,
    }
}

/// Author line under a post card.
fn byline(post: &Post) -> String {
    let author = post
        .username
        .clone()
        .unwrap_or_else(|| "Anonymous".to_owned());
    format!("{author} • {}", display_date(&post.created_at))
}

/// Post listing with optional owner actions.
#[component]
pub fn PostList(
    source: PostSource,
    #[prop(default = "No posts available")] empty_message: &'static str,
    #[prop(optional)] show_actions: bool,
) -> impl IntoView {
    let posts = LocalResource::new(move || fetch(source));
    let action_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if !crate::util::confirm::confirm("Are you sure you want to delete this post?") {
                return;
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_post(id).await {
                    Ok(()) => {
                        action_error.set(None);
                        posts.refetch();
                    }
                    Err(ApiError::Unauthorized) => {
                        navigate(
                            &crate::util::auth::sign_in_path(source.return_path()),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="post-list">
            <Show when=move || action_error.get().is_some()>
                <div class="alert alert--error">{move || action_error.get().unwrap_or_default()}</div>
            </Show>
            <Suspense fallback=move || view! { <p class="post-list__loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Err(error) => view! {
                                <div class="alert alert--error">
                                    <p class="alert__title">"Error:"</p>
                                    <p>{error.to_string()}</p>
                                </div>
                            }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <div class="post-list__empty">
                                    <p>{empty_message}</p>
                                    <a href="/posts/create">"Create a post"</a>
                                </div>
                            }
                                .into_any(),
                            Ok(list) => view! {
                                <div class="post-list__cards">
                                    {list
                                        .into_iter()
                                        .map(|post| {
                                            view! {
                                                <PostCard post=post show_actions=show_actions on_delete=on_delete/>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One card in the listing.
#[component]
fn PostCard(post: Post, show_actions: bool, on_delete: Callback<i64>) -> impl IntoView {
    let detail_href = format!("/posts/{}", post.id);
    let edit_href = format!("/posts/{}/edit", post.id);
    let id = post.id;
    let meta = byline(&post);

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <h2 class="post-card__title">
                    <a href=detail_href.clone()>{post.title.clone()}</a>
                </h2>
                <Show when=move || show_actions>
                    <div class="post-card__actions">
                        <a class="post-card__edit" href=edit_href.clone()>"Edit"</a>
                        <button class="post-card__delete" on:click=move |_| on_delete.run(id)>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </header>
            <p class="post-card__excerpt">{post.content.clone()}</p>
            <footer class="post-card__meta">
                <span>{meta}</span>
                <a href=detail_href>"Read more"</a>
            </footer>
        </article>
    }
}
