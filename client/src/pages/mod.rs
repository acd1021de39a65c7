//! Page modules for route-level screens.
//!
//! Each page is mounted on exactly one entry of `routes::AppRoute`.

pub mod dashboard;
pub mod login;
