use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::PROGRESS_SLIDES;
use crate::core::carousel::Carousel;
use crate::core::Language;
use crate::hooks::use_autoplay;
use crate::t;

#[component]
pub fn ProgressCarousel(lang: Language) -> Element {
    let mut carousel = use_signal(|| Carousel::wrapping(PROGRESS_SLIDES.len()));
    use_autoplay(carousel, SiteConfig::global().autoplay.progress_ms, None);

    let current = carousel().index();
    let slide = &PROGRESS_SLIDES[current];

    rsx! {
        div { class: "progress",
            div { class: "progress__intro",
                h2 { class: "section-title", {t!(lang, "progress-title")} }
                p { {t!(lang, "progress-intro")} }
            }
            div { class: "progress__stage",
                for (i, s) in PROGRESS_SLIDES.iter().enumerate() {
                    img {
                        key: "{i}",
                        class: if i == current { "progress__image progress__image--active" } else { "progress__image" },
                        src: s.image,
                        alt: s.title.text(lang),
                        loading: "lazy",
                    }
                }
                div { class: "progress__caption", key: "{current}",
                    h3 { {slide.title.text(lang)} }
                    p { {slide.text.text(lang)} }
                }
            }
            div { class: "dots progress__dots",
                for i in 0..PROGRESS_SLIDES.len() {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: if i == current { "dots__dot dots__dot--active" } else { "dots__dot" },
                        aria_label: t!(lang, "progress-goto-slide", number = (i + 1).to_string()),
                        onclick: move |_| {
                            carousel.with_mut(|c| c.select(i));
                        },
                    }
                }
            }
        }
    }
}
