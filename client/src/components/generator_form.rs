//! Model generation form: prompt, model type, optional animation.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AnimationType, BBModelResponse, ModelType};
use crate::state::auth::AuthState;
use crate::util::validation::{FieldErrors, PROMPT_MAX_CHARS, validate_generate};

/// Validates input, submits the job, and hands the initial descriptor to
/// `on_generated`.
#[component]
pub fn GeneratorForm(on_generated: Callback<BBModelResponse>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let prompt = RwSignal::new(String::new());
    let model_type = RwSignal::new(ModelType::default().as_str().to_owned());
    let animation_type = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_generate(&prompt.get(), &model_type.get(), &animation_type.get()) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        let Some(token) = auth.get_untracked().bearer().map(str::to_owned) else {
            error.set(Some(api::GENERATION_FAILED.to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::generate_model(&token, &request).await {
                Ok(response) => on_generated.run(response),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    let field_error = move |name: &'static str| move || field_errors.get().get(name).copied();

    view! {
        <section class="panel generator-form">
            <h2>"Generate bbmodel"</h2>
            <p class="panel__lead">
                "Describe the 3D model you want to create in detail. The AI will generate a bbmodel file compatible with Blockbench."
            </p>
            <Show when=move || error.get().is_some()>
                <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Prompt"
                    <textarea
                        class="form__input form__input--multiline"
                        rows="4"
                        placeholder="A blocky knight with a red cape and a long sword"
                        prop:value=move || prompt.get()
                        on:input=move |ev| prompt.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    ></textarea>
                </label>
                <p class="form__hint">
                    {move || format!("{}/{PROMPT_MAX_CHARS}", prompt.get().trim().chars().count())}
                </p>
                <p class="form__error">{field_error("prompt")}</p>

                <label class="form__label">
                    "Model Type"
                    <select
                        class="form__input"
                        prop:value=move || model_type.get()
                        on:change=move |ev| model_type.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    >
                        {ModelType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <p class="form__error">{field_error("model_type")}</p>

                <label class="form__label">
                    "Animation Type (Optional)"
                    <select
                        class="form__input"
                        prop:value=move || animation_type.get()
                        on:change=move |ev| animation_type.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    >
                        <option value="">"None"</option>
                        {AnimationType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Generating..." } else { "Generate Model" }}
                </button>
            </form>
        </section>
    }
}
