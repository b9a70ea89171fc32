use dioxus::prelude::*;

use crate::components::{
    About, Affiliates, CompanyFigures, ConnectWithUs, Culture, Faq, Footer, HeroCarousel,
    NavigationBar, News, ProgressCarousel, SocialFeed, Services, VisionQuote, WhoWeAre,
};
use crate::core::platform::Platform;
use crate::core::reveal::{RevealSet, RevealTarget};
use crate::core::sections::{Section, SectionTracker};
use crate::i18n;
use crate::t;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The single landing page. Owns the current language and the shared
/// section, reveal and viewport state, and lays the sections out in page
/// order.
#[component]
pub fn Home() -> Element {
    let mut language = use_context_provider(|| Signal::new(i18n::preferred_language()));
    let sections = use_signal(SectionTracker::default);
    let reveals = use_signal(RevealSet::default);
    let viewport = use_signal(|| None::<f64>);

    use_hook(|| {
        i18n::init();
        tracing::info!(
            "[home] rendering in {} ({:?})",
            language.peek().code(),
            Platform::current()
        );
    });

    let lang = language();
    let shown = reveals();
    let title = t!(lang, "site-title");

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: t!(lang, "site-description") }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "page page-home", lang: lang.html_lang(),
            NavigationBar {
                lang,
                sections,
                reveals,
                viewport,
                on_toggle_language: move |_| {
                    let next = language.peek().toggle();
                    tracing::info!("[home] language -> {}", next.code());
                    language.set(next);
                },
            }

            main { class: "page-home__main",
                HeroCarousel { lang }

                section { id: Section::WhoWeAre.dom_id(), class: "page-section",
                    WhoWeAre { lang }
                    VisionQuote { lang, revealed: shown.is_revealed(RevealTarget::Quote) }
                    Affiliates { lang }
                }

                section { id: Section::Core.dom_id(), class: "page-section page-section--tinted",
                    CompanyFigures { lang, started: shown.is_revealed(RevealTarget::Figures) }
                    ProgressCarousel { lang }
                }

                section { id: Section::Services.dom_id(), class: "page-section",
                    Services { lang, revealed: shown.is_revealed(RevealTarget::Services) }
                }

                section { id: Section::News.dom_id(), class: "page-section",
                    About { lang }
                    News { lang, viewport, revealed: shown.is_revealed(RevealTarget::News) }
                    SocialFeed { lang }
                    Culture { lang }
                }

                section { id: Section::Faq.dom_id(), class: "page-section page-section--tinted",
                    Faq { lang }
                }

                ConnectWithUs { lang, revealed: shown.is_revealed(RevealTarget::Connect) }
            }

            Footer { lang }
        }
    }
}
