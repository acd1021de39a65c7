//! Dashboard placeholder shown at `/dashboard`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

/// Welcome text rendered by the placeholder.
pub const DASHBOARD_GREETING: &str = "Bienvenido al dashboard 🔐";

/// Dashboard page: static welcome text, no data or side effects.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <div class="p-10">{DASHBOARD_GREETING}</div> }
}
