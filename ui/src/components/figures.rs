use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::COMPANY_FIGURES;
use crate::core::count_up;
use crate::core::reveal::RevealTarget;
use crate::core::Language;
use crate::hooks::use_count_up;
use crate::t;

/// Headline numbers that count up the first time the grid is on screen.
#[component]
pub fn CompanyFigures(lang: Language, started: ReadOnlySignal<bool>) -> Element {
    let duration = SiteConfig::global().count_up_ms;
    let elapsed = use_count_up(duration, started);
    let elapsed_ms = elapsed();

    rsx! {
        div { class: "figures",
            h2 { class: "section-title", {t!(lang, "figures-title")} }
            p { class: "section-subtitle", {t!(lang, "figures-subtitle")} }
            dl { id: RevealTarget::Figures.dom_id(), class: "figures__grid",
                for (i, figure) in COMPANY_FIGURES.iter().enumerate() {
                    div { key: "{i}", class: "figures__item",
                        dt { class: "figures__value",
                            {count_up::group_thousands(count_up::value_at(figure.value, elapsed_ms, duration))}
                            {figure.suffix}
                        }
                        dd { class: "figures__label", {figure.label.text(lang)} }
                    }
                }
            }
        }
    }
}
