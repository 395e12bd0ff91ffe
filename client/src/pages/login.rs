//! Login page: username + password against the backend's token endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::auth::AuthState;
use crate::util::auth::{Guard, install_redirect};
use crate::util::session;
use crate::util::validation::{FieldErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, Guard::RequireAnonymous, use_navigate());
    on_cleanup(move || session::clear_error(auth));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        match validate_login(&username.get(), &password.get()) {
            Ok((user, pass)) => {
                field_errors.set(FieldErrors::new());
                leptos::task::spawn_local(session::login(auth, user, pass));
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let field_error = move |name: &'static str| move || field_errors.get().get(name).copied();
    let busy = move || auth.get().loading;

    view! {
        <Header/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <Show when=move || auth.get().error.is_some()>
                    <p class="alert alert--error">{move || auth.get().error.unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=busy
                        />
                    </label>
                    <p class="form__error">{field_error("username")}</p>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=busy
                        />
                    </label>
                    <p class="form__error">{field_error("password")}</p>
                    <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Sign Up"</a>
                </p>
            </div>
        </main>
    }
}
