//! Shared UI crate for Fraudcheck. Core logic and the check page live here;
//! the platform crates only launch it.

pub mod check;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand header with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
