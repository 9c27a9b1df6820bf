//! Post editing page. Prefills the form from the existing post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::post_create::validate_post;
use super::post_detail::parse_post_id;
use crate::net::api;
use crate::net::error::ApiError;
use crate::session::hook::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn PostEditPage() -> impl IntoView {
    let params = use_params_map();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let is_authenticated = use_session();
    let navigate = use_navigate();
    let return_path = format!(
        "/posts/{}/edit",
        params.get_untracked().get("id").unwrap_or_default()
    );
    install_unauth_redirect(is_authenticated, return_path, navigate.clone());

    let existing = LocalResource::new(move || {
        let id = parse_post_id(params.get().get("id").as_deref());
        async move {
            match id {
                Some(id) => api::fetch_post(id).await,
                None => Err(ApiError::Server {
                    status: 404,
                    message: "Post not found".to_owned(),
                }),
            }
        }
    });

    // Prefill once; later edits belong to the user, not the fetch.
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        if let Some(Ok(post)) = existing.get() {
            title.set(post.title);
            content.set(post.content);
            loaded.set(true);
        }
    });

    let detail_path = move || {
        format!(
            "/posts/{}",
            params.get_untracked().get("id").unwrap_or_default()
        )
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = parse_post_id(params.get_untracked().get("id").as_deref()) else {
            error.set(Some("Post not found".to_owned()));
            return;
        };
        let (title_value, content_value) = match validate_post(&title.get(), &content.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::update_post(id, &title_value, &content_value).await {
                    Ok(post) => {
                        navigate(&format!("/posts/{}", post.id), NavigateOptions::default());
                    }
                    Err(ApiError::Unauthorized) => {
                        navigate(
                            &crate::util::auth::sign_in_path(&format!("/posts/{id}/edit")),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, title_value, content_value);
            busy.set(false);
        }
    };

    view! {
        <div class="page editor-page">
            <a class="page__back" href=detail_path()>"Back to post"</a>
            <h1>"Edit Post"</h1>
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="editor-form" on:submit=on_submit>
                <label class="editor-form__label">
                    "Title"
                    <input
                        class="editor-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="editor-form__label">
                    "Content"
                    <textarea
                        class="editor-form__textarea"
                        rows="12"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="editor-form__actions">
                    <a class="btn" href=detail_path()>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
