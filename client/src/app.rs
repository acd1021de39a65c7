//! Root application component with routing and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::routes::AppRoute;

/// Text shown by the router fallback for paths outside the route table.
pub const NOT_FOUND_TEXT: &str = "Página no encontrada.";

/// Document description served in the SSR `<head>`.
pub const SITE_DESCRIPTION: &str = "Reserva y gestiona espacios de coworking.";

/// Spanish HTML document rendered on the server around `App`. The title and
/// stylesheet are injected through `MetaTags` by `App` itself.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=SITE_DESCRIPTION/>
                <meta name="theme-color" content="#2563eb"/>
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
/// Registers the static route table with the router and yields to it. Only
/// `/` and `/dashboard` are handled here; anything else falls through to the
/// router fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/coworking.css"/>
        <Title text="Coworking"/>

        <Router>
            <Routes fallback=|| NOT_FOUND_TEXT.into_view()>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
