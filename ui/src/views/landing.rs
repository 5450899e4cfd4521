use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{AppNavbar, Footer, Hero, HowItWorks};
use crate::core::platform::platform_string;
use crate::hooks::use_motion_policy_provider;
use crate::i18n::use_i18n_provider;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Page shell: owns the translation and motion contexts and lays out the
/// sections. `path` is the full request path (`/es`, `/en/...`).
#[component]
pub fn Landing(path: String) -> Element {
    let mut i18n = use_i18n_provider(&path);
    let motion = use_motion_policy_provider();

    use_effect(use_reactive((&path,), move |(path,)| {
        let locale = i18n.resolve_route(&path);
        debug!(
            "[landing] {path} -> {locale} on {} (animate={})",
            platform_string(),
            motion.animate
        );
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: if motion.animate { "page page--motion" } else { "page page--static" },
            AppNavbar {}
            main { class: "page__main",
                Hero {}
                HowItWorks {}
            }
            Footer {}
        }
    }
}
