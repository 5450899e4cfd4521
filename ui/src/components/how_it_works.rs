use dioxus::prelude::*;

use crate::config::{links, PARTICLE_COUNT, PARTICLE_SEED};
use crate::core::disclosure::Disclosure;
use crate::core::particles::{scatter, Particle};
use crate::hooks::use_motion_policy;
use crate::i18n::use_translator;

const DISCORD_ICON: Asset = asset!("/assets/icons/discord.svg");

/// Decorative particles; same layout on every render.
#[component]
fn Particles() -> Element {
    let motion = use_motion_policy();
    let particles = use_hook(|| scatter(PARTICLE_SEED, PARTICLE_COUNT));

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for (index, particle) in particles.iter().enumerate() {
                span {
                    key: "{index}",
                    class: motion.class("particle particle--floating", "particle"),
                    style: Particle::style(particle),
                }
            }
        }
    }
}

#[component]
fn StepCard(index: usize, step: &'static str) -> Element {
    let tr = use_translator();
    let motion = use_motion_policy();
    let features = tr.strings(&format!("howItWorks.steps.{step}.features"));

    rsx! {
        article {
            class: motion.class("step-card anim-stagger", "step-card"),
            style: "--stagger-index:{index}",
            span { class: "step-card__number", "{index + 1}" }
            h3 { class: "step-card__title", {tr.t(&format!("howItWorks.steps.{step}.title"))} }
            p { class: "step-card__description", {tr.t(&format!("howItWorks.steps.{step}.description"))} }
            if index == 0 {
                a {
                    class: "btn btn--discord step-card__cta",
                    href: links::DISCORD_INVITE,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    img { class: "btn__icon", src: DISCORD_ICON, alt: "" }
                    span { {tr.t("howItWorks.steps.step1.cta")} }
                }
            }
            if !features.is_empty() {
                ul { class: "step-card__features",
                    for feature in features {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }
        }
    }
}

/// One question/answer pair. Each item owns its disclosure, so several can
/// be open at once.
#[component]
fn FaqItem(index: usize) -> Element {
    let tr = use_translator();
    let motion = use_motion_policy();
    let mut state = use_signal(Disclosure::default);
    let open = state().is_open();

    let button_id = format!("faq-q-{index}");
    let panel_id = format!("faq-a-{index}");

    rsx! {
        div { class: if open { "faq__item is-open" } else { "faq__item" },
            h3 { class: "faq__question",
                button {
                    id: "{button_id}",
                    class: "faq__toggle",
                    r#type: "button",
                    aria_expanded: state().aria_expanded(),
                    aria_controls: "{panel_id}",
                    onclick: move |_| state.write().toggle(),
                    span { {tr.t(&format!("howItWorks.faq.items.{index}.q"))} }
                    span { class: "faq__chevron", aria_hidden: "true" }
                }
            }
            if open {
                div {
                    id: "{panel_id}",
                    class: motion.class("faq__answer anim-expand", "faq__answer"),
                    role: "region",
                    aria_labelledby: "{button_id}",
                    p { {tr.t(&format!("howItWorks.faq.items.{index}.a"))} }
                }
            }
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    let tr = use_translator();
    let faq_count = tr.count("howItWorks.faq.items");

    rsx! {
        section { id: "how", class: "how",
            Particles {}

            header { class: "section-header",
                h2 { class: "section-header__title", {tr.t("howItWorks.title.part1")} }
                p { class: "section-header__subtitle", {tr.t("howItWorks.subtitle")} }
            }

            div { id: "usage", class: "steps",
                for (index, step) in ["step1", "step2", "step3"].into_iter().enumerate() {
                    StepCard { key: "{step}", index, step }
                }
            }

            div { id: "faq", class: "faq",
                header { class: "section-header",
                    h2 { class: "section-header__title", {tr.t("howItWorks.faq.title")} }
                    p { class: "section-header__subtitle", {tr.t("howItWorks.faq.subtitle")} }
                }
                div { class: "faq__list",
                    for index in 0..faq_count {
                        FaqItem { key: "{index}", index }
                    }
                }
            }

            div { class: "final-cta",
                h2 { class: "final-cta__title", {tr.t("howItWorks.finalCta.title")} }
                p { class: "final-cta__subtitle", {tr.t("howItWorks.finalCta.subtitle")} }
                a {
                    class: "btn btn--discord btn--lg",
                    href: links::DISCORD_INVITE,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    img { class: "btn__icon", src: DISCORD_ICON, alt: "" }
                    span { {tr.t("howItWorks.finalCta.buttonText")} }
                }
            }
        }
    }
}
