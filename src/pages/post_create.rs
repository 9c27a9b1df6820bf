//! Post creation page.

#[cfg(test)]
#[path = "post_create_test.rs"]
mod post_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::hook::use_session;
use crate::util::auth::install_unauth_redirect;

/// Validate and normalize the post form input. Shared with the edit page.
pub(super) fn validate_post(title: &str, content: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    let content = content.trim();
    if content.is_empty() {
        return Err("Enter some content.");
    }
    Ok((title.to_owned(), content.to_owned()))
}

#[component]
pub fn PostCreatePage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let is_authenticated = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(is_authenticated, "/posts/create", navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
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
                match crate::net::api::create_post(&title_value, &content_value).await {
                    Ok(post) => {
                        navigate(&format!("/posts/{}", post.id), NavigateOptions::default());
                    }
                    Err(crate::net::error::ApiError::Unauthorized) => {
                        navigate(
                            &crate::util::auth::sign_in_path("/posts/create"),
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
            let _ = (title_value, content_value);
            busy.set(false);
        }
    };

    view! {
        <div class="page editor-page">
            <a class="page__back" href="/posts">"Back to posts"</a>
            <h1>"Create New Post"</h1>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Publishing..." } else { "Publish" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
