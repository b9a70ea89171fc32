//! Shared UI crate for the CHAN MR Group landing page. Page state, copy,
//! components and views live here; platform shells only mount `views::Home`.

pub mod bridge;
pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    mod about;
    mod affiliates;
    mod connect;
    mod culture;
    mod faq;
    mod figures;
    mod footer;
    mod hero;
    mod navbar;
    mod news;
    mod progress;
    mod quote;
    mod services;
    mod social_feed;
    mod who_we_are;

    pub use about::About;
    pub use affiliates::Affiliates;
    pub use connect::ConnectWithUs;
    pub use culture::Culture;
    pub use faq::Faq;
    pub use figures::CompanyFigures;
    pub use footer::Footer;
    pub use hero::HeroCarousel;
    pub use navbar::NavigationBar;
    pub use news::News;
    pub use progress::ProgressCarousel;
    pub use quote::VisionQuote;
    pub use services::Services;
    pub use social_feed::SocialFeed;
    pub use who_we_are::WhoWeAre;
}
