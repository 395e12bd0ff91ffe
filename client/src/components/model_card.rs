//! Dashboard card for one generated model.

use leptos::prelude::*;

use crate::net::types::{BBModel, ModelStatus};
use crate::state::auth::AuthState;
use crate::util::format::{display_date, status_chip_class};

/// Card with preview, status chip, prompt excerpt, and actions.
///
/// Delete is only requested here; the dashboard owns confirmation.
#[component]
pub fn ModelCard(model: BBModel, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let download_error = RwSignal::new(None::<String>);
    let downloading = RwSignal::new(false);

    let href = format!("/models/{}", model.id);
    let chip_class = status_chip_class(&model.status);
    let status_label = model.status.to_string();
    let created = display_date(&model.created_at);
    let is_completed = model.status == ModelStatus::Completed;
    let filename = model.download_filename();
    let model_id = model.id.clone();

    let on_download = move |_| {
        if downloading.get_untracked() {
            return;
        }
        let Some(token) = auth.get_untracked().bearer().map(str::to_owned) else {
            return;
        };
        downloading.set(true);
        download_error.set(None);
        let model_id = model_id.clone();
        let filename = filename.clone();
        leptos::task::spawn_local(async move {
            if let Err(message) = crate::util::download::download_model(&token, &model_id, &filename).await {
                download_error.set(Some(message));
            }
            downloading.set(false);
        });
    };

    let delete_id = model.id.clone();
    let on_delete_click = move |_| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(delete_id.clone());
        }
    };

    let preview = match model.preview_url.clone() {
        Some(url) => view! { <img class="model-card__image" src=url alt=model.name.clone()/> }.into_any(),
        None => view! { <span class="model-card__no-preview">"No preview available"</span> }.into_any(),
    };

    view! {
        <article class="model-card">
            <div class="model-card__preview">
                {preview}
                <span class=chip_class>{status_label}</span>
            </div>
            <div class="model-card__body">
                <h3 class="model-card__name">{model.name.clone()}</h3>
                <p class="model-card__date">"Created: " {created}</p>
                <p class="model-card__prompt">{model.prompt.clone()}</p>
                <Show when=move || download_error.get().is_some()>
                    <p class="alert alert--error">{move || download_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
            <div class="model-card__actions">
                <a class="btn" href=href title="View Model">
                    "View"
                </a>
                <span class="model-card__spacer"></span>
                <Show when=move || is_completed>
                    <button class="btn" on:click=on_download.clone() disabled=move || downloading.get()>
                        {move || if downloading.get() { "Downloading..." } else { "Download" }}
                    </button>
                </Show>
                <Show when=move || on_delete.is_some()>
                    <button
                        class="btn btn--danger"
                        title="Delete Model"
                        aria-label="Delete model"
                        on:click=on_delete_click.clone()
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </article>
    }
}
