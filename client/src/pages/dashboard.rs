//! Dashboard page listing the user's generated models.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the model list once the
//! session is confirmed, then searches, paginates, and deletes locally.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::model_card::ModelCard;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::models::{DashboardState, EmptyState};
use crate::util::auth::{Guard, install_redirect};

/// Dashboard page: search box, model grid, pager, delete confirmation.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, Guard::RequireUser, use_navigate());

    let dashboard = RwSignal::new(DashboardState::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let Some(token) = auth.get().bearer().map(str::to_owned) else {
            return;
        };
        requested.set(true);
        leptos::task::spawn_local(async move {
            let result = api::list_models(&token, 0, api::MODEL_LIST_LIMIT).await;
            dashboard.try_update(|d| match result {
                Ok(models) => d.set_models(models),
                Err(message) => d.set_error(message),
            });
        });
    });

    let on_delete_request = Callback::new(move |id: String| dashboard.update(|d| d.request_delete(id)));
    let on_delete_cancel = Callback::new(move |()| dashboard.update(DashboardState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| dashboard.update(DashboardState::confirm_delete));

    view! {
        <Header/>
        <Show
            when=move || auth.get().is_authenticated
            fallback=move || {
                view! {
                    <main class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </main>
                }
            }
        >
            <main class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"My Models"</h1>
                    <a class="btn btn--primary" href="/create">"+ Create New Model"</a>
                </header>

                <input
                    class="form__input dashboard-page__search"
                    type="search"
                    placeholder="Search models by name or description"
                    prop:value=move || dashboard.get().query
                    on:input=move |ev| dashboard.update(|d| d.set_query(event_target_value(&ev)))
                />

                <Show when=move || dashboard.get().error.is_some()>
                    <p class="alert alert--error">{move || dashboard.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !dashboard.get().loading
                    fallback=move || view! { <p class="dashboard-page__loading">"Loading models..."</p> }
                >
                    {move || match dashboard.get().empty_state() {
                        Some(EmptyState::NoModels) => view! {
                            <div class="empty-state">
                                <h2>"No models found"</h2>
                                <p>"You haven't created any models yet"</p>
                                <a class="btn btn--primary" href="/create">"Create Your First Model"</a>
                            </div>
                        }
                        .into_any(),
                        Some(EmptyState::NoMatches) => view! {
                            <div class="empty-state">
                                <h2>"No models found"</h2>
                                <p>"Try a different search term or clear the search"</p>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="dashboard-page__cards">
                                {dashboard
                                    .get()
                                    .page_items()
                                    .into_iter()
                                    .map(|model| view! { <ModelCard model=model on_delete=on_delete_request/> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <Pager dashboard=dashboard/>
                        }
                        .into_any(),
                    }}
                </Show>

                <Show when=move || dashboard.get().pending_delete.is_some()>
                    <DeleteModelDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
                </Show>
            </main>
        </Show>
    }
}

/// Page buttons, hidden when everything fits on one page.
#[component]
fn Pager(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <Show when=move || { dashboard.get().page_count() > 1 }>
            <nav class="pager" aria-label="Pages">
                {move || {
                    let state = dashboard.get();
                    (1..=state.page_count())
                        .map(|page| {
                            let active = page == state.page;
                            view! {
                                <button
                                    class="pager__page"
                                    class:pager__page--active=active
                                    on:click=move |_| {
                                        dashboard.update(|d| d.set_page(page));
                                        #[cfg(feature = "hydrate")]
                                        if let Some(window) = web_sys::window() {
                                            window.scroll_to_with_x_and_y(0.0, 0.0);
                                        }
                                    }
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </Show>
    }
}

/// Confirmation dialog for removing a model from the list.
#[component]
fn DeleteModelDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Model"</h2>
                <p>"Are you sure you want to delete this model?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
