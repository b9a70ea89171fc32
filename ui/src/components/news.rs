use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::NEWS;
use crate::core::carousel::Carousel;
use crate::core::format::reveal_delay_style;
use crate::core::platform::news_window;
use crate::core::reveal::RevealTarget;
use crate::core::Language;
use crate::t;

/// Paged strip of news cards. Three cards side by side on wide screens, one
/// at or below the configured breakpoint. Paging stops at either end.
#[component]
pub fn News(lang: Language, viewport: ReadOnlySignal<Option<f64>>, revealed: bool) -> Element {
    let config = SiteConfig::global();
    let initial_window = news_window(f64::INFINITY, config.news_breakpoint_px);
    let mut carousel = use_signal(|| Carousel::clamped(NEWS.len(), initial_window));

    use_effect(move || {
        if let Some(width) = viewport() {
            let window = news_window(width, config.news_breakpoint_px);
            if carousel.peek().window() != window {
                carousel.with_mut(|c| c.set_window(window));
            }
        }
    });

    let strip = carousel();
    let stagger = config.reveal.news_stagger_ms;
    let card_class = match (strip.window(), revealed) {
        (1, true) => "news-card news-card--single reveal reveal--in",
        (1, false) => "news-card news-card--single reveal",
        (_, true) => "news-card reveal reveal--in",
        (_, false) => "news-card reveal",
    };

    rsx! {
        div { class: "news",
            p { class: "news__watermark", aria_hidden: true, {t!(lang, "news-watermark")} }
            h2 { class: "section-title", {t!(lang, "news-title")} }
            p { class: "section-subtitle", {t!(lang, "news-subtitle")} }

            div { class: "news__viewport",
                button {
                    class: "news__arrow news__arrow--prev",
                    r#type: "button",
                    disabled: !strip.can_retreat(),
                    aria_label: t!(lang, "news-prev"),
                    onclick: move |_| {
                        carousel.with_mut(|c| c.retreat());
                    },
                    "‹"
                }

                div { id: RevealTarget::News.dom_id(), class: "news__track",
                    for (i, article) in NEWS.iter().enumerate().filter(|(i, _)| strip.is_visible(*i)) {
                        article {
                            key: "{i}",
                            class: card_class,
                            style: reveal_delay_style(i - strip.index(), stagger),
                            img { class: "news-card__image", src: article.image, alt: article.title.text(lang), loading: "lazy" }
                            div { class: "news-card__body",
                                div { class: "news-card__meta",
                                    span { class: "news-card__category", {article.category.text(lang)} }
                                    time { class: "news-card__date", {article.date.text(lang)} }
                                }
                                h3 { class: "news-card__title", {article.title.text(lang)} }
                                p { class: "news-card__excerpt", {article.excerpt.text(lang)} }
                                a { class: "news-card__more", href: "#news", {t!(lang, "news-read-more")} }
                            }
                        }
                    }
                }

                button {
                    class: "news__arrow news__arrow--next",
                    r#type: "button",
                    disabled: !strip.can_advance(),
                    aria_label: t!(lang, "news-next"),
                    onclick: move |_| {
                        carousel.with_mut(|c| c.advance());
                    },
                    "›"
                }
            }
        }
    }
}
