use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::leaderboard::{LeaderboardPreview, LeaderboardSkeleton};
use crate::components::rich_text::{line_breaks, render_rich};
use crate::config::{links, ANIMATED_BACKGROUND_DELAY_MS};
use crate::core::timing::sleep_ms;
use crate::hooks::use_motion_policy;
use crate::i18n::use_translator;

const DISCORD_ICON: Asset = asset!("/assets/icons/discord.svg");

const BADGES: [&str; 3] = ["hero.badge1", "hero.badge2", "hero.badge3"];

/// Decorative backdrop. Starts static and swaps to the animated variant
/// shortly after mount when the motion policy allows it.
#[component]
fn HeroBackground() -> Element {
    let motion = use_motion_policy();
    let mut animated = use_signal(|| false);

    use_effect(move || {
        if !motion.animate {
            return;
        }
        spawn(async move {
            sleep_ms(ANIMATED_BACKGROUND_DELAY_MS).await;
            debug!("[hero] switching to animated background");
            animated.set(true);
        });
    });

    rsx! {
        div {
            class: if animated() { "hero__bg hero__bg--animated" } else { "hero__bg hero__bg--static" },
            aria_hidden: "true",
            div { class: "hero__glow hero__glow--primary" }
            div { class: "hero__glow hero__glow--secondary" }
            div { class: "hero__grid" }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let tr = use_translator();
    let motion = use_motion_policy();

    rsx! {
        section { id: "hero", class: "hero",
            HeroBackground {}

            div { class: "hero__inner",
                div { class: motion.class("hero__copy anim-rise", "hero__copy"),
                    p { class: "hero__eyebrow", {tr.t("hero.eyebrow")} }
                    h1 { class: "hero__title", {render_rich(tr.rich("hero.title"), line_breaks)} }

                    div { class: "hero__actions",
                        a {
                            class: "btn btn--discord btn--lg",
                            href: links::DISCORD_INVITE,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            img { class: "btn__icon", src: DISCORD_ICON, alt: "" }
                            span { {tr.t("hero.ctaPrimary")} }
                        }
                    }

                    ul { class: "hero__badges",
                        for (index, key) in BADGES.iter().enumerate() {
                            li {
                                key: "{key}",
                                class: motion.class("badge anim-stagger", "badge"),
                                style: "--stagger-index:{index}",
                                {tr.t(key)}
                            }
                        }
                    }
                }

                div { class: "hero__preview",
                    SuspenseBoundary {
                        fallback: |_| rsx! { LeaderboardSkeleton {} },
                        LeaderboardPreview {}
                    }
                }
            }
        }
    }
}
