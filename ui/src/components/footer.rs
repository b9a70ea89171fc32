use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::{FOOTER_COLUMNS, LEGAL_LINKS};
use crate::core::format::copyright_year;
use crate::core::Language;
use crate::t;

const FOOTER_LOGO: Asset = asset!("/assets/brand/chanmr-logo.svg");

const FACEBOOK_PATH: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";
const YOUTUBE_PATH: &str = "M22.5 6.4a2.8 2.8 0 0 0-2-2C18.8 4 12 4 12 4s-6.8 0-8.5.4a2.8 2.8 0 0 0-2 2A29 29 0 0 0 1 12a29 29 0 0 0 .5 5.6 2.8 2.8 0 0 0 2 2c1.7.4 8.5.4 8.5.4s6.8 0 8.5-.4a2.8 2.8 0 0 0 2-2A29 29 0 0 0 23 12a29 29 0 0 0-.5-5.6z M9.8 15.5l5.7-3.5-5.7-3.5z";
const PHONE_PATH: &str = "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z";

#[component]
fn SocialIcon(href: String, label: String, icon: &'static str) -> Element {
    rsx! {
        a { class: "footer__social", href: "{href}", aria_label: "{label}", target: "_blank", rel: "noopener noreferrer",
            svg {
                view_box: "0 0 24 24",
                width: "20",
                height: "20",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.75",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: icon }
            }
        }
    }
}

#[component]
pub fn Footer(lang: Language) -> Element {
    let config = SiteConfig::global();
    let copyright = t!(
        lang,
        "footer-copyright",
        year = copyright_year().to_string(),
        company = config.legal_name.clone()
    );

    rsx! {
        footer { class: "footer", id: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    img { class: "footer__logo", src: FOOTER_LOGO, alt: t!(lang, "footer-logo-alt") }
                    div { class: "footer__socials",
                        SocialIcon { href: config.social.facebook.clone(), label: t!(lang, "footer-social-facebook"), icon: FACEBOOK_PATH }
                        SocialIcon { href: config.social.youtube.clone(), label: t!(lang, "footer-social-youtube"), icon: YOUTUBE_PATH }
                        SocialIcon { href: config.social.phone.clone(), label: t!(lang, "footer-social-phone"), icon: PHONE_PATH }
                    }
                }
                for (i, column) in FOOTER_COLUMNS.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if column.is_wide() { "footer__column footer__column--wide" } else { "footer__column" },
                        h4 { class: "footer__heading", {column.title.text(lang)} }
                        ul { class: "footer__links",
                            for (j, link) in column.links.iter().enumerate() {
                                li { key: "{j}", a { href: "#", {link.text(lang)} } }
                            }
                        }
                    }
                }
            }
            div { class: "footer__legal",
                p { class: "footer__copyright", "{copyright}" }
                ul { class: "footer__legal-links",
                    for (i, link) in LEGAL_LINKS.iter().enumerate() {
                        li { key: "{i}", a { href: "#", {link.text(lang)} } }
                    }
                }
            }
        }
    }
}
