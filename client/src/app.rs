//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    create_model::CreateModelPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    model_detail::ModelDetailPage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::util::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores any stored token once on the
/// client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    // Effects only run in the browser, so the stored token is read there.
    Effect::new(move || session::restore(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/bbforge.css"/>
        <Title text="AI-Powered bbmodel Generator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("create") view=CreateModelPage/>
                <Route path=(StaticSegment("models"), ParamSegment("id")) view=ModelDetailPage/>
            </Routes>
        </Router>
    }
}
