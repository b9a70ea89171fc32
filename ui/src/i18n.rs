//! Internationalization (i18n) support for `chanmr-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/chanmr-ui.ftl   (fallback/reference)
//!   th-TH/chanmr-ui.ftl
//! ```
//!
//! The site only ever renders one of two languages, so instead of one global
//! loader that gets re-pointed on every toggle, each [`Language`] owns its
//! own `FluentLanguageLoader`. Lookups never mutate shared state, which keeps
//! re-renders and parallel tests independent of each other.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let heading = t!(lang, "services-title");
//! ```
//!
//! Only chrome copy (headings, buttons, intros) lives in Fluent. Repeated
//! records such as news cards and FAQ entries are static bilingual data in
//! `content.rs`.
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::Language;
use crate::error::Result;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro bound to an explicit language.
/// Examples:
///     t!(lang, "nav-jobs")
///     t!(lang, "footer-copyright", year = "2025", company = "CHANMR")
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "chanmr-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));
static TH_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Th));

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK);
    if let Err(err) = select_bundle(&loader, lang) {
        tracing::warn!("[i18n] {err}; {} falls back to {}", lang.tag(), FALLBACK);
    }
    // Placeables (years, names) are rendered into plain DOM text; bidi
    // isolation marks would show up as stray characters. Selecting rebuilds
    // the bundles, so this has to come after it.
    loader.set_use_isolating(false);
    loader
}

fn select_bundle(loader: &FluentLanguageLoader, lang: Language) -> Result<()> {
    i18n_embed::select(loader, &Localizations, &[lang.langid()])?;
    Ok(())
}

/// Loader for a given language. Built on first use.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::En => &EN_LOADER,
        Language::Th => &TH_LOADER,
    }
}

/// Warm both loaders up front so the first toggle does not pay for parsing.
pub fn init() {
    for lang in Language::ALL {
        let loaded = loader(lang).current_language();
        tracing::debug!("[i18n] {} ready ({loaded})", lang.code());
    }
}

/// Look up a message by a runtime id. Prefer `t!` for literal ids; this
/// exists for tests and for ids chosen from data.
pub fn text(lang: Language, id: &str) -> String {
    loader(lang).get(id)
}

pub fn has_message(lang: Language, id: &str) -> bool {
    loader(lang).has(id)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The language the visitor's browser (or OS) asks for first, if it is one
/// we ship; English otherwise.
pub fn preferred_language() -> Language {
    requested_languages()
        .iter()
        .map(|id| id.language.as_str())
        .find(|primary| *primary == "th" || *primary == "en")
        .map(Language::from_tag)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN_US_FTL: &str = include_str!("../i18n/en-US/chanmr-ui.ftl");

    /// Message ids declared at column zero of an FTL resource.
    fn message_ids(source: &str) -> Vec<&str> {
        source
            .lines()
            .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
            .filter_map(|line| line.split_once('='))
            .map(|(id, _)| id.trim())
            .filter(|id| !id.is_empty())
            .collect()
    }

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "th-TH"));
    }

    #[test]
    fn loaders_resolve_their_own_language() {
        assert_eq!(loader(Language::En).current_language(), langid!("en-US"));
        assert_eq!(loader(Language::Th).current_language(), langid!("th-TH"));
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(t!(Language::En, "nav-jobs"), "Jobs");
        assert_eq!(t!(Language::Th, "nav-jobs"), "ร่วมงานกับเรา");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let line = t!(Language::En, "footer-copyright", year = "2025", company = "CHANMR Co., Ltd.");
        assert_eq!(line, "© 2025 CHANMR Co., Ltd. All rights reserved.");
    }

    #[test]
    fn numbered_labels_carry_no_isolation_marks() {
        for lang in Language::ALL {
            let label = t!(lang, "hero-goto-slide", number = "3");
            assert!(label.contains('3'), "{label}");
            assert!(!label.contains(['\u{2068}', '\u{2069}']), "{label:?}");
        }
    }

    #[test]
    fn every_message_renders_non_empty_text_in_both_languages() {
        let ids = message_ids(EN_US_FTL);
        assert!(ids.len() > 50, "only {} ids parsed", ids.len());
        for lang in Language::ALL {
            for id in &ids {
                assert!(has_message(lang, id), "{} lacks {id}", lang.tag());
                let rendered = text(lang, id);
                assert!(!rendered.trim().is_empty(), "{} renders {id} empty", lang.tag());
            }
        }
    }

    #[test]
    fn toggling_twice_restores_text() {
        let lang = Language::En;
        let original = text(lang, "services-title");
        let toggled = text(lang.toggle(), "services-title");
        assert_ne!(original, toggled);
        assert_eq!(text(lang.toggle().toggle(), "services-title"), original);
    }

    #[test]
    fn lookups_in_one_language_do_not_disturb_the_other() {
        init();
        let th = text(Language::Th, "faq-title");
        let en = text(Language::En, "faq-title");
        assert_ne!(th, en);
        assert_eq!(text(Language::Th, "faq-title"), th);
    }

    #[test]
    fn missing_id_is_reported() {
        assert!(!has_message(Language::En, "definitely-not-a-key"));
        assert!(has_message(Language::Th, "hero-cta"));
    }
}
