use dioxus::prelude::*;

use crate::content::AFFILIATES;
use crate::core::Language;
use crate::t;

/// Logo grid of the group's affiliated companies.
#[component]
pub fn Affiliates(lang: Language) -> Element {
    rsx! {
        div { class: "affiliates",
            h2 { class: "section-title", {t!(lang, "affiliates-title")} }
            p { class: "section-subtitle", {t!(lang, "affiliates-subtitle")} }
            ul { class: "affiliates__grid",
                for (i, affiliate) in AFFILIATES.iter().enumerate() {
                    li { key: "{i}", class: "affiliates__item",
                        img {
                            class: "affiliates__logo",
                            src: affiliate.logo,
                            alt: affiliate.name.text(lang),
                            loading: "lazy",
                        }
                        span { class: "affiliates__name", {affiliate.name.text(lang)} }
                    }
                }
            }
        }
    }
}
