use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::leaderboard::{LeaderboardEntry, SAMPLE_LADDER};
use crate::core::timing::next_tick;
use crate::hooks::use_motion_policy;
use crate::i18n::{use_translator, Translator};

/// Placeholder shown while the preview is suspended.
#[component]
pub fn LeaderboardSkeleton() -> Element {
    let tr = use_translator();
    rsx! {
        div {
            class: "leaderboard leaderboard--skeleton",
            role: "status",
            aria_busy: "true",
            aria_label: tr.t("hero.leaderboard.loading"),
            div { class: "leaderboard__header skeleton skeleton--title" }
            for row in 0..SAMPLE_LADDER.len() {
                div { key: "{row}", class: "leaderboard__row skeleton skeleton--row" }
            }
        }
    }
}

fn entry_row(tr: Translator<'static>, entry: LeaderboardEntry, animate: bool) -> Element {
    let lp = entry.lp.to_string();
    let rate = entry.win_rate().to_string();
    let class = if animate {
        "leaderboard__row anim-stagger"
    } else {
        "leaderboard__row"
    };
    rsx! {
        li {
            key: "{entry.rank}",
            class: class,
            style: "--stagger-index:{entry.rank}",
            span { class: "leaderboard__rank", "#{entry.rank}" }
            div { class: "leaderboard__player",
                span { class: "leaderboard__name", "{entry.name}" }
                span { class: "tier {entry.tier.css_modifier()}", "{entry.tier.label()}" }
            }
            div { class: "leaderboard__stats",
                span { class: "leaderboard__lp", {tr.t_with("hero.leaderboard.lp", &[("lp", &lp)])} }
                span { class: "leaderboard__record", "{entry.record()}" }
                span { class: "leaderboard__winrate", {tr.t_with("hero.leaderboard.winRate", &[("rate", &rate)])} }
            }
            span { class: "leaderboard__points", "+{entry.points}" }
        }
    }
}

/// Sample ladder preview. Suspends for one tick so the hero paints first.
#[component]
pub fn LeaderboardPreview() -> Element {
    let tr = use_translator();
    let motion = use_motion_policy();
    let ladder = use_resource(|| async {
        next_tick().await;
        SAMPLE_LADDER
    })
    .suspend()?;

    let week = OffsetDateTime::now_utc().iso_week().to_string();
    let entries = *ladder.read();

    rsx! {
        div { class: "leaderboard",
            div { class: "leaderboard__header",
                h2 { class: "leaderboard__title", {tr.t_with("hero.leaderboard.title", &[("week", &week)])} }
            }
            ol { class: "leaderboard__rows",
                for entry in entries {
                    {entry_row(tr, entry, motion.animate)}
                }
            }
            ul { class: "leaderboard__features",
                for feature in tr.strings("hero.leaderboard.features") {
                    li { key: "{feature}", class: "leaderboard__feature", "{feature}" }
                }
            }
        }
    }
}
