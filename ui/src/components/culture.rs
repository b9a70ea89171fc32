use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::CULTURE_IMAGES;
use crate::core::carousel::Carousel;
use crate::core::Language;
use crate::hooks::use_autoplay;
use crate::t;

/// Culture photo carousel next to the culture and careers panels.
#[component]
pub fn Culture(lang: Language) -> Element {
    let mut carousel = use_signal(|| Carousel::wrapping(CULTURE_IMAGES.len()));
    use_autoplay(carousel, SiteConfig::global().autoplay.culture_ms, None);
    let current = carousel().index();

    rsx! {
        div { class: "culture",
            div { class: "culture__intro",
                h2 { class: "section-title", {t!(lang, "culture-group-name")} }
                p { {t!(lang, "culture-intro")} }
            }
            div { class: "culture__layout",
                div { class: "culture__gallery",
                    for (i, src) in CULTURE_IMAGES.iter().enumerate() {
                        img {
                            key: "{i}",
                            class: if i == current { "culture__image culture__image--active" } else { "culture__image" },
                            src: *src,
                            alt: t!(lang, "culture-image-alt"),
                            loading: "lazy",
                        }
                    }
                    div { class: "dots culture__dots",
                        for i in 0..CULTURE_IMAGES.len() {
                            button {
                                key: "{i}",
                                r#type: "button",
                                class: if i == current { "dots__dot dots__dot--active" } else { "dots__dot" },
                                aria_label: t!(lang, "culture-goto-image", number = (i + 1).to_string()),
                                onclick: move |_| {
                                    carousel.with_mut(|c| c.select(i));
                                },
                            }
                        }
                    }
                }
                div { class: "culture__panels",
                    div { class: "panel",
                        h3 { class: "panel__title", {t!(lang, "culture-title")} }
                        p { {t!(lang, "culture-body")} }
                        a { class: "panel__link", href: "#culture", {t!(lang, "culture-cta")} }
                    }
                    div { class: "panel panel--accent", id: "careers",
                        h3 { class: "panel__title", {t!(lang, "careers-title")} }
                        p { {t!(lang, "careers-body")} }
                        a { class: "panel__link", href: "#connect", {t!(lang, "careers-cta")} }
                    }
                }
            }
        }
    }
}
