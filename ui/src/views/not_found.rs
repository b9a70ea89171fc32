use dioxus::prelude::*;

use crate::core::Language;
use crate::t;

/// Fallback for unknown paths. Follows the visitor's language when the
/// landing page has already provided one.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = try_use_context::<Signal<Language>>()
        .map(|l| l())
        .unwrap_or_else(crate::i18n::preferred_language);
    tracing::debug!("[router] no page at /{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found", lang: lang.html_lang(),
            h1 { {t!(lang, "notfound-title")} }
            p { {t!(lang, "notfound-body")} }
            a { class: "button button--accent", href: "/", {t!(lang, "notfound-home")} }
        }
    }
}
