//! Create-model page: form, live generation status, and download.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission returns a job descriptor; the page then polls its status every
//! two seconds until it completes or fails. Leaving the page cancels the poll.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::generator_form::GeneratorForm;
use crate::components::header::Header;
use crate::components::model_viewer::ModelViewer;
use crate::net::types::BBModelResponse;
use crate::state::auth::AuthState;
use crate::state::generation::{GenerationState, GenerationStep};
use crate::util::auth::{Guard, install_redirect};
use crate::util::{download, poller};

#[component]
pub fn CreateModelPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, Guard::RequireUser, use_navigate());

    let generation = RwSignal::new(GenerationState::default());
    let download_error = RwSignal::new(None::<String>);
    on_cleanup(move || {
        generation.try_update(GenerationState::cancel);
    });

    let on_generated = Callback::new(move |response: BBModelResponse| {
        let model_id = response.model_id.clone();
        let Some(epoch) = generation.try_update(|g| g.start(response)) else {
            return;
        };
        if !generation.get_untracked().is_polling() {
            return;
        }
        if let Some(token) = auth.get_untracked().bearer() {
            poller::spawn(generation, token.to_owned(), model_id, epoch);
        }
    });

    let on_download = move |_| {
        let Some(model_id) = generation.get_untracked().response.map(|r| r.model_id) else {
            return;
        };
        let Some(token) = auth.get_untracked().bearer().map(str::to_owned) else {
            return;
        };
        download_error.set(None);
        leptos::task::spawn_local(async move {
            let filename = format!("{model_id}.bbmodel");
            if let Err(message) = download::download_model(&token, &model_id, &filename).await {
                download_error.set(Some(message));
            }
        });
    };

    let step = move || generation.get().step;
    let response = move || generation.get().response;
    let preview_url = Signal::derive(move || generation.get().response.and_then(|r| r.preview_url));

    view! {
        <Header/>
        <main class="create-page">
            <h1>"Create New Model"</h1>
            <ol class="stepper">
                {GenerationStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li
                                class="stepper__step"
                                class:stepper__step--active={move || step() == s}
                                class:stepper__step--done={move || s.is_done_at(step())}
                            >
                                <span class="stepper__index">{s.index() + 1}</span>
                                <span class="stepper__label">{s.label()}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            <Show when=move || generation.get().error.is_some()>
                <p class="alert alert--error">{move || generation.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || step() != GenerationStep::EnterDetails
                fallback=move || view! { <GeneratorForm on_generated=on_generated/> }
            >
                <div class="create-page__columns">
                    <section class="panel">
                        <h2>"Generation Status"</h2>
                        <p>
                            <strong>"Status: "</strong>
                            {move || response().map(|r| r.status.to_string()).unwrap_or_default()}
                        </p>
                        <p>
                            <strong>"Model ID: "</strong>
                            {move || response().map(|r| r.model_id).unwrap_or_default()}
                        </p>
                        <Show when=move || response().and_then(|r| r.message).is_some()>
                            <p>
                                <strong>"Message: "</strong>
                                {move || response().and_then(|r| r.message).unwrap_or_default()}
                            </p>
                        </Show>

                        <Show when=move || generation.get().is_polling()>
                            <p class="create-page__progress">
                                <span class="spinner" aria-hidden="true"></span>
                                "Processing your request... This may take a minute."
                            </p>
                        </Show>

                        <Show when=move || step() == GenerationStep::ReviewDownload>
                            <div class="create-page__actions">
                                <button class="btn btn--primary btn--block" on:click=on_download>
                                    "Download bbmodel"
                                </button>
                                <a class="btn btn--block" href="/dashboard">"View All Models"</a>
                            </div>
                            <Show when=move || download_error.get().is_some()>
                                <p class="alert alert--error">{move || download_error.get().unwrap_or_default()}</p>
                            </Show>
                        </Show>

                        <Show when=move || !generation.get().is_polling()>
                            <button class="btn btn--link" on:click=move |_| generation.update(GenerationState::reset)>
                                "Start Over"
                            </button>
                        </Show>
                    </section>

                    <section class="panel">
                        <h2>"Preview"</h2>
                        <ModelViewer preview_url=preview_url file=Signal::stored(None)/>
                    </section>
                </div>
            </Show>
        </main>
    }
}
