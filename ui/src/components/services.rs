use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::SERVICES;
use crate::core::format::reveal_delay_style;
use crate::core::reveal::RevealTarget;
use crate::core::Language;
use crate::t;

/// Service cards. Cards fade in one after another once the grid has been
/// on screen.
#[component]
pub fn Services(lang: Language, revealed: bool) -> Element {
    let stagger = SiteConfig::global().reveal.services_stagger_ms;

    rsx! {
        div { class: "services",
            h2 { class: "section-title", {t!(lang, "services-title")} }
            p { class: "section-subtitle", {t!(lang, "services-subtitle")} }
            div { id: RevealTarget::Services.dom_id(), class: "services__grid",
                for (i, service) in SERVICES.iter().enumerate() {
                    article {
                        key: "{i}",
                        class: if revealed { "service-card reveal reveal--in" } else { "service-card reveal" },
                        style: reveal_delay_style(i, stagger),
                        div { class: "service-card__icon",
                            svg {
                                view_box: "0 0 24 24",
                                width: "32",
                                height: "32",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "1.75",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: service.icon.path() }
                            }
                        }
                        h3 { class: "service-card__title", {service.title.text(lang)} }
                        p { class: "service-card__text", {service.description.text(lang)} }
                    }
                }
            }
        }
    }
}
