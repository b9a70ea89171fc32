use dioxus::prelude::*;

use crate::core::reveal::{reveal_class, RevealTarget};
use crate::core::Language;
use crate::t;

#[component]
pub fn VisionQuote(lang: Language, revealed: bool) -> Element {
    rsx! {
        blockquote {
            id: RevealTarget::Quote.dom_id(),
            class: reveal_class("quote", revealed),
            h3 { class: "quote__title", {t!(lang, "quote-title")} }
            p { class: "quote__body", {t!(lang, "quote-body")} }
        }
    }
}
