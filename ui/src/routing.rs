//! Navigation hooks registered by the platform crate.
//!
//! `ui` does not know the platform's `Route` enum (or whether a router
//! exists at all), so the platform registers plain functions at startup:
//!
//! ```ignore
//! use ui::routing::{register_nav, NavHooks};
//!
//! fn replace_path(path: &str) {
//!     navigator().replace(path.to_string());
//! }
//!
//! register_nav(NavHooks { replace: replace_path });
//! ```
//!
//! Without a registration the locale still switches; only the URL stays put.

use dioxus::logger::tracing::warn;
use once_cell::sync::OnceCell;

pub struct NavHooks {
    /// Replace the current history entry with `path`.
    pub replace: fn(path: &str),
}

static NAV_HOOKS: OnceCell<NavHooks> = OnceCell::new();

/// Register the platform's navigation hooks. Later registrations are ignored.
pub fn register_nav(hooks: NavHooks) {
    let _ = NAV_HOOKS.set(hooks);
}

pub(crate) fn replace_path(path: &str) {
    match NAV_HOOKS.get() {
        Some(hooks) => (hooks.replace)(path),
        None => warn!("[routing] no navigation hooks registered; URL not updated to {path}"),
    }
}
