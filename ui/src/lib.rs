//! Shared UI crate for the Ranky landing page. Locale handling, capability
//! detection, state machines and every page section live here; platform
//! crates only provide routing.

pub mod config;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod routing;
pub mod views;

pub mod components {
    // Top bar with brand, language switcher and Discord CTA (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod hero;
    pub use hero::Hero;

    // Deferred ladder preview and its skeleton (components/leaderboard.rs)
    pub mod leaderboard;
    pub use leaderboard::{LeaderboardPreview, LeaderboardSkeleton};

    pub mod how_it_works;
    pub use how_it_works::HowItWorks;

    // Link columns, credits dialog and legal notice (components/footer.rs)
    pub mod footer;
    pub use footer::Footer;

    pub mod rich_text;
}
