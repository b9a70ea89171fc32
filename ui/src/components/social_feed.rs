use dioxus::prelude::*;

use crate::content::SOCIAL_POSTS;
use crate::core::format::post_date;
use crate::core::Language;
use crate::t;

/// Mock Facebook feed rendered from static posts.
#[component]
pub fn SocialFeed(lang: Language) -> Element {
    rsx! {
        div { class: "social",
            h2 { class: "section-title", {t!(lang, "social-title")} }
            div { class: "social__grid",
                for post in SOCIAL_POSTS.iter() {
                    article { key: "{post.id}", class: "social-card",
                        if let Some(picture) = post.picture {
                            img { class: "social-card__image", src: picture, alt: "", loading: "lazy" }
                        }
                        div { class: "social-card__body",
                            time { class: "social-card__date", datetime: post.created_at,
                                {post_date(post.created_at, lang)}
                            }
                            p { class: "social-card__message", {post.message.text(lang)} }
                            a {
                                class: "social-card__link",
                                href: post.permalink,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                {t!(lang, "social-read-more")}
                            }
                        }
                    }
                }
            }
        }
    }
}
