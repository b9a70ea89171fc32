use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::{WHO_WE_ARE_SLIDES, WHO_WE_ARE_VIDEO};
use crate::core::carousel::Carousel;
use crate::core::Language;
use crate::hooks::use_autoplay;
use crate::t;

/// Company introduction with a small photo carousel that can be swapped for
/// the corporate video. Autoplay holds while the video is showing.
#[component]
pub fn WhoWeAre(lang: Language) -> Element {
    let mut carousel = use_signal(|| Carousel::wrapping(WHO_WE_ARE_SLIDES.len()));
    let mut showing_video = use_signal(|| false);
    use_autoplay(
        carousel,
        SiteConfig::global().autoplay.who_we_are_ms,
        Some(showing_video),
    );

    let current = carousel().index();

    rsx! {
        div { class: "who",
            div { class: "who__copy",
                p { class: "section-eyebrow", {t!(lang, "who-section-title")} }
                h2 { class: "who__heading", {t!(lang, "who-heading")} }
                p { class: "who__description", {t!(lang, "who-description")} }
                button {
                    class: "button button--outline",
                    r#type: "button",
                    onclick: move |_| showing_video.with_mut(|v| *v = !*v),
                    if showing_video() {
                        {t!(lang, "who-back-to-slides")}
                    } else {
                        {t!(lang, "who-watch-video")}
                    }
                }
            }

            div { class: "who__media",
                if showing_video() {
                    video {
                        class: "who__video",
                        src: WHO_WE_ARE_VIDEO,
                        controls: true,
                        autoplay: true,
                        playsinline: true,
                        {t!(lang, "who-video-fallback")}
                    }
                } else {
                    for (i, src) in WHO_WE_ARE_SLIDES.iter().enumerate() {
                        img {
                            key: "{i}",
                            class: if i == current { "who__slide who__slide--active" } else { "who__slide" },
                            src: *src,
                            alt: t!(lang, "who-slide-alt", number = (i + 1).to_string()),
                        }
                    }
                    div { class: "dots who__dots",
                        for i in 0..WHO_WE_ARE_SLIDES.len() {
                            button {
                                key: "{i}",
                                r#type: "button",
                                class: if i == current { "dots__dot dots__dot--active" } else { "dots__dot" },
                                aria_label: t!(lang, "who-slide-alt", number = (i + 1).to_string()),
                                onclick: move |_| {
                                    carousel.with_mut(|c| c.select(i));
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
