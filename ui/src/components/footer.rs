use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::rich_text::render_rich;
use crate::config::links;
use crate::core::disclosure::Disclosure;
use crate::hooks::{use_escape_key, use_motion_policy};
use crate::i18n::use_translator;

const BRAND_MARK: Asset = asset!("/assets/brand/ranky-mark.svg");
const DISCORD_ICON: Asset = asset!("/assets/icons/discord.svg");

/// Team member shown in the credits dialog. Name, role and description live
/// under `footer.credits.members.<key>`.
struct Credit {
    key: &'static str,
    initials: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const CREDITS: [Credit; 3] = [
    Credit {
        key: "lead",
        initials: "MK",
        links: &[("GitHub", links::GITHUB_PROFILE)],
    },
    Credit {
        key: "frontend",
        initials: "ZN",
        links: &[("Zennith", links::PARTNER_SITE)],
    },
    Credit {
        key: "community",
        initials: "DC",
        links: &[("Discord", links::DISCORD_INVITE)],
    },
];

/// Modal listing the team. Closes on backdrop click, the close button or
/// Escape; clicks inside the panel stay inside.
#[component]
fn CreditsDialog(state: Signal<Disclosure>) -> Element {
    let tr = use_translator();
    let motion = use_motion_policy();
    let mut state = state;

    use_escape_key(move || state.peek().is_open(), move || state.write().close());

    if !state().is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: motion.class("modal__backdrop anim-fade", "modal__backdrop"),
            onclick: move |_| state.write().close(),
            div {
                class: motion.class("modal anim-rise", "modal"),
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "credits-title",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "modal__header",
                    h2 { id: "credits-title", class: "modal__title", {tr.t("footer.credits.title")} }
                    p { class: "modal__subtitle", {tr.t("footer.credits.subtitle")} }
                    button {
                        class: "modal__close",
                        r#type: "button",
                        aria_label: tr.t("footer.credits.close"),
                        onmounted: move |evt: MountedEvent| async move {
                            if let Err(err) = evt.set_focus(true).await {
                                debug!("[footer] could not focus credits close button: {err:?}");
                            }
                        },
                        onclick: move |_| state.write().close(),
                        "×"
                    }
                }
                p { class: "modal__intro", {tr.t("footer.credits.intro")} }
                ul { class: "credits",
                    for credit in CREDITS.iter() {
                        li { key: "{credit.key}", class: "credits__member",
                            span { class: "credits__avatar", aria_hidden: "true", "{credit.initials}" }
                            div { class: "credits__body",
                                h3 { class: "credits__name", {tr.t(&format!("footer.credits.members.{}.name", credit.key))} }
                                p { class: "credits__role", {tr.t(&format!("footer.credits.members.{}.role", credit.key))} }
                                p { class: "credits__description", {tr.t(&format!("footer.credits.members.{}.description", credit.key))} }
                                div { class: "credits__links",
                                    for (label, href) in credit.links.iter() {
                                        a {
                                            key: "{href}",
                                            class: "credits__link",
                                            href: *href,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                p { class: "modal__thanks", {tr.t("footer.credits.thanks")} }
            }
        }
    }
}

/// In-page legal anchors: (fragment, label key).
const LEGAL_LINKS: [(&str, &str); 3] = [
    ("#privacy", "footer.legal.privacy"),
    ("#terms", "footer.legal.terms"),
    ("#contact", "footer.legal.contact"),
];

fn external_link(href: &'static str, label: String) -> Element {
    rsx! {
        a {
            class: "footer__link",
            href: href,
            target: "_blank",
            rel: "noopener noreferrer",
            "{label}"
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let tr = use_translator();
    let mut credits = use_signal(Disclosure::default);
    let year = OffsetDateTime::now_utc().year().to_string();

    let made_by = render_rich(tr.rich("footer.madeBy"), |name, inner| match name {
        "heart" => rsx! { span { class: "footer__heart", aria_hidden: "true", "♥" } },
        "a" => external_link(links::PARTNER_SITE, inner.unwrap_or_default().to_string()),
        _ => rsx! { {inner.unwrap_or_default()} },
    });
    let riot_notice = render_rich(tr.rich("footer.riotNotice"), |name, inner| match name {
        "a" => external_link(links::RIOT_LEGAL, inner.unwrap_or_default().to_string()),
        _ => rsx! { {inner.unwrap_or_default()} },
    });

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    img { class: "footer__logo", src: BRAND_MARK, alt: tr.t("footer.brandAlt") }
                    p { class: "footer__tagline", {tr.t("footer.tagline")} }
                    a {
                        class: "btn btn--discord",
                        href: links::DISCORD_INVITE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img { class: "btn__icon", src: DISCORD_ICON, alt: "" }
                        span { {tr.t("footer.ctaPrimary")} }
                    }
                }

                nav { class: "footer__columns",
                    div { class: "footer__column",
                        h3 { {tr.t("footer.product.title")} }
                        a { class: "footer__link", href: "#how", {tr.t("footer.product.how")} }
                        a { class: "footer__link", href: "#usage", {tr.t("footer.product.usage")} }
                        a { class: "footer__link", href: "#faq", {tr.t("footer.product.faq")} }
                    }
                    div { class: "footer__column",
                        h3 { {tr.t("footer.community.title")} }
                        {external_link(links::DISCORD_INVITE, tr.t("footer.social.discord"))}
                        {external_link(links::GITHUB_REPO, tr.t("footer.social.github"))}
                        button {
                            class: "footer__link footer__link--button",
                            r#type: "button",
                            aria_haspopup: "dialog",
                            aria_expanded: credits().aria_expanded(),
                            onclick: move |_| credits.write().open(),
                            {tr.t("footer.community.credits")}
                        }
                    }
                    div { class: "footer__column",
                        h3 { {tr.t("footer.legal.title")} }
                        for (href, label) in LEGAL_LINKS {
                            a { key: "{href}", class: "footer__link", href: href, {tr.t(label)} }
                        }
                    }
                }
            }

            div { class: "footer__bottom",
                div { class: "footer__social",
                    {external_link(links::TWITTER, tr.t("footer.social.twitter"))}
                    {external_link(links::PARTNER_SITE, tr.t("footer.social.website"))}
                }
                p { class: "footer__rights", {tr.t_with("footer.rights", &[("year", &year)])} }
                p { class: "footer__made-by", {made_by} }
                p { class: "footer__riot", {riot_notice} }
            }

            CreditsDialog { state: credits }
        }
    }
}
