use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::HERO_SLIDES;
use crate::core::carousel::Carousel;
use crate::core::sections::Section;
use crate::core::Language;
use crate::hooks::use_autoplay;
use crate::t;

/// Full-bleed slideshow at the top of the page. Wraps in both directions.
#[component]
pub fn HeroCarousel(lang: Language) -> Element {
    let mut carousel = use_signal(|| Carousel::wrapping(HERO_SLIDES.len()));
    use_autoplay(carousel, SiteConfig::global().autoplay.hero_ms, None);

    let current = carousel().index();
    let slide = &HERO_SLIDES[current];

    rsx! {
        section { class: "hero", id: "top",
            div { class: "hero__slides",
                for (i, s) in HERO_SLIDES.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if i == current { "hero__slide hero__slide--active" } else { "hero__slide" },
                        aria_hidden: i != current,
                        img { class: "hero__image", src: s.image, alt: s.title.text(lang) }
                    }
                }
                div { class: "hero__shade" }
            }

            div { class: "hero__content", key: "{current}",
                p { class: "hero__eyebrow", {t!(lang, "hero-eyebrow")} }
                h1 { class: "hero__title", {slide.title.text(lang)} }
                p { class: "hero__text", {slide.text.text(lang)} }
                a { class: "button button--accent", href: Section::Services.anchor(),
                    {t!(lang, "hero-cta")}
                }
            }

            button {
                class: "hero__arrow hero__arrow--prev",
                r#type: "button",
                aria_label: t!(lang, "hero-prev"),
                onclick: move |_| {
                    carousel.with_mut(|c| c.retreat());
                },
                "‹"
            }
            button {
                class: "hero__arrow hero__arrow--next",
                r#type: "button",
                aria_label: t!(lang, "hero-next"),
                onclick: move |_| {
                    carousel.with_mut(|c| c.advance());
                },
                "›"
            }

            div { class: "dots hero__dots",
                for i in 0..HERO_SLIDES.len() {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: if i == current { "dots__dot dots__dot--active" } else { "dots__dot" },
                        aria_label: t!(lang, "hero-goto-slide", number = (i + 1).to_string()),
                        aria_current: i == current,
                        onclick: move |_| {
                            carousel.with_mut(|c| c.select(i));
                        },
                    }
                }
            }
        }
    }
}
