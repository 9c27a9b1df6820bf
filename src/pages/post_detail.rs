//! Post detail page with owner actions.

#[cfg(test)]
#[path = "post_detail_test.rs"]
mod post_detail_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Post, User};
use crate::session::credentials;
use crate::util::date::display_date;

/// Parse the `:id` route parameter. Shared with the edit page.
pub(super) fn parse_post_id(raw: Option<&str>) -> Option<i64> {
    raw?.parse().ok()
}

/// Whether the viewer may edit or delete the post.
fn is_owner(post: &Post, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|user| user.id == post.user_id)
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let detail = LocalResource::new(move || {
        let id = parse_post_id(params.get().get("id").as_deref());
        async move {
            let Some(id) = id else {
                return Err(ApiError::Server {
                    status: 404,
                    message: "Post not found".to_owned(),
                });
            };
            let post = api::fetch_post(id).await?;
            // The viewer is resolved only to decide owner actions; a stale
            // token degrades to an anonymous view.
            let viewer = if credentials::has_access_token() {
                api::fetch_me().await.ok()
            } else {
                None
            };
            Ok((post, viewer))
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if !crate::util::confirm::confirm("Are you sure you want to delete this post?") {
                return;
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_post(id).await {
                    Ok(()) => navigate("/posts", NavigateOptions::default()),
                    Err(ApiError::Unauthorized) => {
                        navigate(
                            &crate::util::auth::sign_in_path(&format!("/posts/{id}")),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => leptos::logging::warn!("delete failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="page detail-page">
            <a class="page__back" href="/posts">"Back to posts"</a>
            <Suspense fallback=move || view! { <p class="detail-page__loading">"Loading post..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Err(error) => view! {
                                <div class="alert alert--error">{error.to_string()}</div>
                            }
                                .into_any(),
                            Ok((post, viewer)) => {
                                let owned = is_owner(&post, viewer.as_ref());
                                let id = post.id;
                                let author = post
                                    .username
                                    .clone()
                                    .unwrap_or_else(|| "Anonymous".to_owned());
                                let written = display_date(&post.created_at);
                                view! {
                                    <article class="detail">
                                        <header class="detail__header">
                                            <h1>{post.title.clone()}</h1>
                                            <Show when=move || owned>
                                                <div class="detail__actions">
                                                    <a class="btn btn--outline" href=format!("/posts/{id}/edit")>"Edit"</a>
                                                    <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </Show>
                                        </header>
                                        <p class="detail__meta">{format!("{author} • {written}")}</p>
                                        <div class="detail__content">{post.content.clone()}</div>
                                    </article>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
