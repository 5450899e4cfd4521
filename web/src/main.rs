use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::i18n::initial_locale;
use ui::routing::{register_nav, NavHooks};
use ui::views::Landing;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn replace_path(path: &str) {
    if let Some(failure) = navigator().replace(path.to_string()) {
        warn!("[routing] could not navigate to {path}: {failure:?}");
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavHooks {
        replace: replace_path,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }

        Router::<Route> {}
    }
}

/// `/` has no locale yet: pick one and replace the history entry. Every
/// other path renders the landing page, whose shell resolves the locale from
/// the first segment.
#[component]
fn Page(segments: Vec<String>) -> Element {
    if segments.is_empty() {
        return rsx! { RootRedirect {} };
    }

    let path = format!("/{}", segments.join("/"));
    rsx! {
        Landing { path }
    }
}

#[component]
fn RootRedirect() -> Element {
    use_effect(|| replace_path(&format!("/{}", initial_locale().code())));
    rsx! {}
}
