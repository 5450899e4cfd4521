use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::config::links;
use crate::core::locale::Locale;
use crate::core::menu::{LanguageMenu, MenuEffect, MenuEvent};
use crate::hooks::{use_menu_dismissal, use_scrolled};
use crate::i18n::use_i18n;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const BRAND_MARK: Asset = asset!("/assets/brand/ranky-mark.svg");
const DISCORD_ICON: Asset = asset!("/assets/icons/discord.svg");
const FLAG_ES: Asset = asset!("/assets/flags/es.svg");
const FLAG_US: Asset = asset!("/assets/flags/us.svg");

/// Selector shared by the trigger and the list; pointer-downs inside it do
/// not dismiss the menu.
const MENU_SCOPE: &str = "[data-lang-menu]";

fn flag(locale: Locale) -> Asset {
    match locale {
        Locale::Es => FLAG_ES,
        Locale::En => FLAG_US,
    }
}

/// Top bar: brand link to the localized home, the language switcher and the
/// Discord CTA. Gains a shadow once the page scrolls.
#[component]
pub fn AppNavbar() -> Element {
    let mut i18n = use_i18n();
    let current = i18n.locale();
    let tr = i18n.translator();
    let scrolled = use_scrolled();

    let mut menu = use_signal(LanguageMenu::default);
    let mut focus_first = use_signal(|| false);
    use_menu_dismissal(menu, MENU_SCOPE);

    debug!("[navbar] render lang={current} scrolled={scrolled}");

    let mut dispatch = move |event: MenuEvent| {
        let effect = menu.write().handle(event);
        match effect {
            Some(MenuEffect::FocusFirstItem) => focus_first.set(true),
            Some(MenuEffect::Switch(next)) if next != i18n.locale() => i18n.change_locale(next),
            Some(MenuEffect::Switch(_)) | None => {}
        }
    };

    let open = menu.read().is_open();
    let toggle_label = tr.t("navbar.toggleLabel");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: if scrolled { "navbar navbar--scrolled" } else { "navbar" },
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "/{current.code()}",
                    aria_label: tr.t("navbar.home"),
                    img { class: "navbar__brand-mark", src: BRAND_MARK, alt: tr.t("navbar.brandAlt") }
                    span { class: "navbar__brand-name", "Ranky" }
                }

                div { class: "navbar__actions",
                    div {
                        class: "navbar__locale",
                        "data-lang-menu": "true",
                        button {
                            class: "navbar__locale-toggle",
                            r#type: "button",
                            aria_haspopup: "menu",
                            aria_expanded: "{open}",
                            aria_label: "{toggle_label}",
                            title: "{toggle_label}",
                            onclick: move |_| dispatch(MenuEvent::Toggle),
                            img { class: "navbar__flag", src: flag(current), alt: "" }
                            span { class: "navbar__locale-code", "{current.code().to_uppercase()}" }
                        }
                        if open {
                            ul {
                                class: "navbar__locale-menu",
                                role: "menu",
                                aria_label: tr.t("navbar.menuLabel"),
                                for (index, locale) in Locale::ALL.into_iter().enumerate() {
                                    li { key: "{locale.code()}", role: "none",
                                        button {
                                            class: if locale == current { "navbar__locale-item is-active" } else { "navbar__locale-item" },
                                            r#type: "button",
                                            role: "menuitemradio",
                                            lang: locale.code(),
                                            aria_checked: "{locale == current}",
                                            onmounted: move |evt: MountedEvent| async move {
                                                if index == 0 && focus_first() {
                                                    focus_first.set(false);
                                                    if let Err(err) = evt.set_focus(true).await {
                                                        debug!("[navbar] could not focus first language: {err:?}");
                                                    }
                                                }
                                            },
                                            onclick: move |_| dispatch(MenuEvent::Select(locale)),
                                            img { class: "navbar__flag", src: flag(locale), alt: "" }
                                            span { "{locale.label()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    a {
                        class: "btn btn--discord navbar__cta",
                        href: links::DISCORD_INVITE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img { class: "btn__icon", src: DISCORD_ICON, alt: "" }
                        span { {tr.t("navbar.ctaPrimary")} }
                    }
                }
            }
        }
    }
}
