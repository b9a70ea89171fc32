use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::bridge::{self, NavSignal, ObservedTargets};
use crate::config::SiteConfig;
use crate::content::MAIN_MENU;
use crate::core::disclosure::MenuState;
use crate::core::reveal::{RevealSet, RevealTarget};
use crate::core::scroll::{NavVisibility, ScrollTracker};
use crate::core::sections::{Section, SectionTracker};
use crate::core::Language;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/brand/chanmr-logo.svg");

const BURGER_PATH: &str = "M4 6h16 M4 12h16 M4 18h16";
const CLOSE_PATH: &str = "M6 6l12 12 M18 6L6 18";

/// Fixed site header: top utility bar, main menu with dropdown panels, the
/// mobile drawer and the secondary section bar.
///
/// The header owns the browser bridge, so scroll, viewport and section
/// observers live exactly as long as it is mounted. Section, reveal and
/// viewport state is written into signals owned by the page so other
/// sections can react to them.
#[component]
pub fn NavigationBar(
    lang: Language,
    sections: Signal<SectionTracker>,
    reveals: Signal<RevealSet>,
    viewport: Signal<Option<f64>>,
    on_toggle_language: EventHandler<()>,
) -> Element {
    let mut sections = sections;
    let mut reveals = reveals;
    let mut viewport = viewport;
    let config = SiteConfig::global();
    let tracker = use_hook(|| Rc::new(RefCell::new(ScrollTracker::new(config.nav))));
    let mut visibility = use_signal(NavVisibility::default);
    let mut menu = use_signal(MenuState::default);

    let on_signal = use_callback(move |signal: NavSignal| match signal {
        NavSignal::Scrolled(y) => {
            let next = tracker.borrow_mut().observe(y);
            if *visibility.peek() != next {
                visibility.set(next);
            }
        }
        NavSignal::Resized(width) => {
            if *viewport.peek() != Some(width) {
                viewport.set(Some(width));
            }
        }
        NavSignal::Intersection {
            section,
            intersecting,
        } => {
            let mut next = *sections.peek();
            if next.observe(section, intersecting) {
                tracing::debug!("[nav] active section -> {}", section.dom_id());
                sections.set(next);
            }
        }
        NavSignal::Revealed(target) => {
            let mut next = *reveals.peek();
            if next.reveal(target) {
                reveals.set(next);
            }
        }
        NavSignal::Unavailable => {
            if *reveals.peek() != RevealSet::all() {
                reveals.set(RevealSet::all());
            }
        }
    });
    bridge::use_nav_signals(
        ObservedTargets {
            sections: &Section::ALL,
            section_threshold: config.section_visibility_threshold,
            reveals: &RevealTarget::ALL,
            reveal_threshold: config.reveal_visibility_threshold,
        },
        on_signal,
    );

    let state = visibility();
    let open_menu = menu().active();
    let mobile_open = menu().mobile_open();
    let tracker_now = sections();

    let mut header_class = String::from("navbar");
    if state.scrolled {
        header_class.push_str(" navbar--scrolled");
    }
    if mobile_open {
        header_class.push_str(" navbar--mobile-open");
    }

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "{header_class}",
            div {
                class: if state.top_bar_hidden { "navbar__topbar navbar__topbar--hidden" } else { "navbar__topbar" },
                div { class: "navbar__topbar-inner",
                    a { class: "navbar__utility", href: "#careers", {t!(lang, "nav-jobs")} }
                    a { class: "navbar__utility", href: "#connect", {t!(lang, "nav-brochure")} }
                    button {
                        class: "navbar__lang",
                        r#type: "button",
                        aria_label: t!(lang, "nav-language-label"),
                        onclick: move |_| on_toggle_language.call(()),
                        {t!(lang, "nav-language-toggle")}
                    }
                }
            }

            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#top",
                    img { class: "navbar__logo", src: LOGO, alt: t!(lang, "nav-logo-alt") }
                }

                nav { class: "navbar__links", aria_label: t!(lang, "nav-main-label"),
                    for (i, entry) in MAIN_MENU.iter().enumerate() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: if open_menu == Some(i) { "navbar__link navbar__link--open" } else { "navbar__link" },
                            aria_expanded: open_menu == Some(i),
                            onclick: move |_| menu.with_mut(|m| m.toggle(i)),
                            "{entry.label.text(lang)}"
                        }
                    }
                }

                button {
                    class: "navbar__burger",
                    r#type: "button",
                    aria_expanded: mobile_open,
                    aria_label: if mobile_open { t!(lang, "nav-close-menu") } else { t!(lang, "nav-open-menu") },
                    onclick: move |_| menu.with_mut(|m| m.toggle_mobile()),
                    svg {
                        view_box: "0 0 24 24",
                        width: "24",
                        height: "24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        path { d: if mobile_open { CLOSE_PATH } else { BURGER_PATH } }
                    }
                }
            }

            if let Some(index) = open_menu {
                div {
                    class: "navbar__backdrop",
                    onclick: move |_| menu.with_mut(|m| m.close()),
                }
                div { class: "navbar__dropdown",
                    div { class: "navbar__dropdown-inner",
                        h3 { class: "navbar__dropdown-title", "{MAIN_MENU[index].label.text(lang)}" }
                        p { class: "navbar__dropdown-blurb", "{MAIN_MENU[index].blurb.text(lang)}" }
                        ul { class: "navbar__dropdown-links",
                            for (j, link) in MAIN_MENU[index].links.iter().enumerate() {
                                li { key: "{j}",
                                    a {
                                        href: "#",
                                        onclick: move |_| menu.with_mut(|m| m.close()),
                                        "{link.text(lang)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if mobile_open {
                div { class: "navbar__mobile",
                    for (i, entry) in MAIN_MENU.iter().enumerate() {
                        div { key: "{i}", class: "navbar__mobile-group",
                            button {
                                r#type: "button",
                                class: "navbar__mobile-link",
                                aria_expanded: open_menu == Some(i),
                                onclick: move |_| menu.with_mut(|m| m.toggle(i)),
                                "{entry.label.text(lang)}"
                            }
                            if open_menu == Some(i) {
                                ul { class: "navbar__mobile-sublinks",
                                    for (j, link) in entry.links.iter().enumerate() {
                                        li { key: "{j}", a { href: "#", "{link.text(lang)}" } }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "navbar__mobile-utility",
                        a { href: "#careers", {t!(lang, "nav-jobs")} }
                        a { href: "#connect", {t!(lang, "nav-brochure")} }
                        button {
                            r#type: "button",
                            class: "navbar__lang",
                            onclick: move |_| on_toggle_language.call(()),
                            {t!(lang, "nav-language-other")}
                        }
                    }
                }
            }
        }

        nav {
            class: if state.secondary_visible { "subnav subnav--visible" } else { "subnav" },
            aria_label: t!(lang, "nav-sections-label"),
            ul { class: "subnav__list",
                for section in Section::ALL {
                    li { key: "{section.dom_id()}",
                        a {
                            class: if tracker_now.is_active(section) { "subnav__link subnav__link--active" } else { "subnav__link" },
                            href: section.anchor(),
                            "{section.nav_label(lang)}"
                        }
                    }
                }
            }
        }
    }
}
