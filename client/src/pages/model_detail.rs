//! Model detail page: metadata, prompt, download, and 3D preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend has no single-model endpoint, so the page lists the user's
//! models and picks the one matching the route id. For completed models the
//! bbmodel document is downloaded and handed to the 3D viewer.

#[cfg(test)]
#[path = "model_detail_test.rs"]
mod model_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use viewer::file::BBModelFile;

use crate::components::header::Header;
use crate::components::model_viewer::ModelViewer;
use crate::net::api;
use crate::net::types::{BBModel, ModelStatus};
use crate::state::auth::AuthState;
use crate::util::auth::{Guard, install_redirect};
use crate::util::download;
use crate::util::format::{display_date, status_chip_class};

pub const MODEL_NOT_FOUND: &str = "Model not found";

/// Pick `model_id` out of a listing.
fn find_model(models: Vec<BBModel>, model_id: &str) -> Result<BBModel, String> {
    models
        .into_iter()
        .find(|m| m.id == model_id)
        .ok_or_else(|| MODEL_NOT_FOUND.to_owned())
}

/// Parse downloaded bytes for preview. Unparseable documents fall back to
/// the static preview instead of failing the page.
fn preview_document(bytes: &[u8]) -> Option<BBModelFile> {
    BBModelFile::from_slice(bytes).ok()
}

/// Whether a response fetched for `requested` still matches the route.
/// `None` means the page is gone.
fn still_requested(current: Option<String>, requested: &str) -> bool {
    current.as_deref() == Some(requested)
}

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Loading,
    Ready(BBModel),
    Failed(String),
}

#[component]
pub fn ModelDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, Guard::RequireUser, use_navigate());
    let params = use_params_map();

    let loaded = RwSignal::new(Loaded::Loading);
    let document = RwSignal::new(None::<BBModelFile>);
    let download_error = RwSignal::new(None::<String>);

    // Memos so unrelated auth writes (errors, loading flags) don't refetch.
    let token = Memo::new(move |_| auth.with(|state| state.bearer().map(str::to_owned)));
    let route_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    Effect::new(move || {
        let model_id = route_id.get();
        let Some(token) = token.get() else {
            return;
        };
        loaded.set(Loaded::Loading);
        document.set(None);
        leptos::task::spawn_local(async move {
            let found = match api::list_models(&token, 0, api::MODEL_LIST_LIMIT).await {
                Ok(models) => find_model(models, &model_id),
                Err(message) => Err(message),
            };
            if !still_requested(route_id.try_get_untracked(), &model_id) {
                return;
            }
            let completed = matches!(&found, Ok(model) if model.status == ModelStatus::Completed);
            loaded.try_set(match found {
                Ok(model) => Loaded::Ready(model),
                Err(message) => Loaded::Failed(message),
            });
            if !completed {
                return;
            }
            match api::download_model(&token, &model_id).await {
                Ok(bytes) => {
                    if still_requested(route_id.try_get_untracked(), &model_id) {
                        document.try_set(preview_document(&bytes));
                    }
                }
                Err(message) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("model detail: preview download failed for {model_id}: {message}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = message;
                }
            }
        });
    });

    let on_download = move |_| {
        let Loaded::Ready(model) = loaded.get_untracked() else {
            return;
        };
        let Some(token) = auth.get_untracked().bearer().map(str::to_owned) else {
            return;
        };
        download_error.set(None);
        leptos::task::spawn_local(async move {
            if let Err(message) = download::download_model(&token, &model.id, &model.download_filename()).await {
                download_error.set(Some(message));
            }
        });
    };

    view! {
        <Header/>
        <main class="detail-page">
            <a class="btn btn--link" href="/dashboard">"← Back to Dashboard"</a>
            {move || match loaded.get() {
                Loaded::Loading => view! { <p class="detail-page__loading">"Loading model..."</p> }.into_any(),
                Loaded::Failed(message) => view! { <p class="alert alert--error">{message}</p> }.into_any(),
                Loaded::Ready(model) => {
                    let is_completed = model.status == ModelStatus::Completed;
                    let preview_url = model.preview_url.clone();
                    view! {
                        <header class="detail-page__header">
                            <h1>{model.name.clone()}</h1>
                            <span class=status_chip_class(&model.status)>{model.status.to_string()}</span>
                            <Show when=move || is_completed>
                                <button class="btn btn--primary" on:click=on_download>
                                    "Download"
                                </button>
                            </Show>
                        </header>
                        <Show when=move || download_error.get().is_some()>
                            <p class="alert alert--error">{move || download_error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="detail-page__columns">
                            <section class="panel detail-page__preview">
                                <ModelViewer
                                    preview_url=Signal::stored(preview_url)
                                    file=Signal::derive(move || document.get())
                                />
                            </section>
                            <aside class="detail-page__side">
                                <section class="panel">
                                    <h2>"Model Details"</h2>
                                    <dl class="detail-list">
                                        <dt>"Created"</dt>
                                        <dd>{display_date(&model.created_at)}</dd>
                                        <dt>"Status"</dt>
                                        <dd>{model.status.to_string()}</dd>
                                        <dt>"Model ID"</dt>
                                        <dd>{model.id.clone()}</dd>
                                    </dl>
                                </section>
                                <section class="panel">
                                    <h2>"Prompt"</h2>
                                    <p>{model.prompt.clone()}</p>
                                </section>
                            </aside>
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
