//! Top navigation bar shared by every page.
//!
//! Anonymous visitors see Login/Register; signed-in users see Dashboard,
//! Create Model, and an avatar menu with Logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::session;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let initial = move || auth.get().user.map(|u| u.initial()).unwrap_or_default();
    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();

    let on_logout = move |_| {
        menu_open.set(false);
        session::logout(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="app-header">
            <a class="app-header__title" href="/">
                "AI-Powered bbmodel Generator"
            </a>
            <span class="app-header__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated
                fallback=|| {
                    view! {
                        <nav class="app-header__nav">
                            <a class="btn" href="/login">"Login"</a>
                            <a class="btn btn--primary" href="/register">"Register"</a>
                        </nav>
                    }
                }
            >
                <nav class="app-header__nav">
                    <a class="btn" href="/dashboard">"Dashboard"</a>
                    <a class="btn" href="/create">"Create Model"</a>
                    <div class="avatar-menu">
                        <button
                            class="avatar-menu__button"
                            title=username
                            aria-label="Account menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {initial}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="avatar-menu__popover">
                                <span class="avatar-menu__name">{username}</span>
                                <button class="avatar-menu__item" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </nav>
            </Show>
        </header>
    }
}
