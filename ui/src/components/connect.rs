use dioxus::prelude::*;

use crate::core::reveal::{reveal_class, RevealTarget};
use crate::core::Language;
use crate::t;

#[component]
pub fn ConnectWithUs(lang: Language, revealed: bool) -> Element {
    let phone = &crate::config::SiteConfig::global().social.phone;

    rsx! {
        section { class: "connect", id: "connect",
            div {
                id: RevealTarget::Connect.dom_id(),
                class: reveal_class("connect__inner", revealed),
                h2 { class: "connect__title", {t!(lang, "connect-title")} }
                p { class: "connect__body", {t!(lang, "connect-body")} }
                div { class: "connect__actions",
                    a { class: "button button--accent", href: "{phone}", {t!(lang, "connect-talk")} }
                    a { class: "button button--ghost", href: "#footer", {t!(lang, "connect-subscribe")} }
                }
            }
        }
    }
}
