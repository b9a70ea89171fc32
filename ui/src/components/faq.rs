use dioxus::prelude::*;

use crate::content::FAQ;
use crate::core::disclosure::Accordion;
use crate::core::Language;
use crate::t;

/// Question list where at most one answer is expanded.
#[component]
pub fn Faq(lang: Language) -> Element {
    let mut accordion = use_signal(Accordion::default);
    let open = accordion().open();

    rsx! {
        div { class: "faq",
            div { class: "faq__heading",
                h2 { class: "section-title",
                    {t!(lang, "faq-title")}
                    " "
                    span { class: "faq__brand", {t!(lang, "faq-brand")} }
                }
                p { class: "section-subtitle", {t!(lang, "faq-intro")} }
            }
            div { class: "faq__list",
                for (i, item) in FAQ.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if open == Some(i) { "faq__item faq__item--open" } else { "faq__item" },
                        button {
                            class: "faq__question",
                            r#type: "button",
                            id: "faq-q-{i}",
                            aria_expanded: open == Some(i),
                            aria_controls: "faq-a-{i}",
                            onclick: move |_| accordion.with_mut(|a| a.toggle(i)),
                            span { {item.question.text(lang)} }
                            span { class: "faq__chevron", aria_hidden: true,
                                if open == Some(i) { "−" } else { "+" }
                            }
                        }
                        if open == Some(i) {
                            div {
                                class: "faq__answer",
                                id: "faq-a-{i}",
                                role: "region",
                                aria_labelledby: "faq-q-{i}",
                                p { {item.answer.text(lang)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
