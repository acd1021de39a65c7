//! Static route table for the navigation shell.
//!
//! `app::App` registers each entry with `leptos_router`, which does the
//! actual matching. The helpers here let pages refer to routes without
//! repeating path literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// One registered application route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/`, the login screen.
    Login,
    /// `/dashboard`, the welcome placeholder.
    Dashboard,
}

impl AppRoute {
    /// Absolute browser path for this route, used for navigation.
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Path segment handed to `StaticSegment` when registering the route.
    pub const fn segment(self) -> &'static str {
        match self {
            AppRoute::Login => "",
            AppRoute::Dashboard => "dashboard",
        }
    }
}
