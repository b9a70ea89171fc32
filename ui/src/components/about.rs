use dioxus::prelude::*;

use crate::core::Language;
use crate::t;

#[component]
pub fn About(lang: Language) -> Element {
    rsx! {
        div { class: "about",
            p { class: "section-eyebrow", {t!(lang, "about-eyebrow")} }
            h2 { class: "about__title", {t!(lang, "about-title")} }
            p { class: "about__body", {t!(lang, "about-body")} }
            a { class: "button button--outline", href: "#connect", {t!(lang, "about-cta")} }
        }
    }
}
