//! Registration page.
//!
//! On success the form locks, a confirmation is shown, and the page moves to
//! `/login` after a short delay.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::api;
use crate::util::validation::{FieldErrors, RegisterForm, validate_register};

/// Delay between a successful registration and the redirect to `/login`.
pub const REGISTER_REDIRECT_MS: u64 = 2000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if !success.get() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(REGISTER_REDIRECT_MS)).await;
            navigate("/login", NavigateOptions::default());
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || success.get_untracked() {
            return;
        }
        let request = match validate_register(&form.get()) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => success.set(true),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    let field_error = move |name: &'static str| move || field_errors.get().get(name).copied();
    let locked = move || busy.get() || success.get();

    view! {
        <Header/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get()>
                    <p class="alert alert--success">"Registration successful! Redirecting to login..."</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            disabled=locked
                        />
                    </label>
                    <p class="form__error">{field_error("username")}</p>
                    <label class="form__label">
                        "Email Address"
                        <input
                            class="form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            disabled=locked
                        />
                    </label>
                    <p class="form__error">{field_error("email")}</p>
                    <label class="form__label">
                        "Full Name (Optional)"
                        <input
                            class="form__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                            disabled=locked
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=locked
                        />
                    </label>
                    <p class="form__error">{field_error("password")}</p>
                    <label class="form__label">
                        "Confirm Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                            disabled=locked
                        />
                    </label>
                    <p class="form__error">{field_error("confirm_password")}</p>
                    <button class="btn btn--primary btn--block" type="submit" disabled=locked>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Sign In"</a>
                </p>
            </div>
        </main>
    }
}
