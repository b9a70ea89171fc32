//! The two-valued language selector and a bilingual value pair.

use std::fmt;

use unic_langid::{langid, LanguageIdentifier};

/// Which copy variant the site renders. There are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Th];

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Th,
            Language::Th => Language::En,
        }
    }

    /// BCP-47 tag matching the locale folder under `i18n/`.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Th => "th-TH",
        }
    }

    /// Short label shown on the toggle button.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Th => "TH",
        }
    }

    /// Value for the `lang` attribute of rendered markup.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en-US"),
            Language::Th => langid!("th-TH"),
        }
    }

    /// Anything with a `th` primary subtag is Thai; everything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("th") {
            Language::Th
        } else {
            Language::En
        }
    }

    pub fn pick<T>(self, en: T, th: T) -> T {
        match self {
            Language::En => en,
            Language::Th => th,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An English/Thai pair of the same piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual<T> {
    pub en: T,
    pub th: T,
}

impl<T> Bilingual<T> {
    pub const fn new(en: T, th: T) -> Self {
        Self { en, th }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Th => &self.th,
        }
    }
}

impl Bilingual<&'static str> {
    pub fn text(&self, lang: Language) -> &'static str {
        *self.get(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for lang in Language::ALL {
            assert_eq!(lang.toggle().toggle(), lang);
            assert_ne!(lang.toggle(), lang);
        }
    }

    #[test]
    fn from_tag_recognises_thai_variants() {
        assert_eq!(Language::from_tag("th"), Language::Th);
        assert_eq!(Language::from_tag("th-TH"), Language::Th);
        assert_eq!(Language::from_tag("TH_th"), Language::Th);
        assert_eq!(Language::from_tag("en-GB"), Language::En);
        assert_eq!(Language::from_tag("fr-FR"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn tag_round_trips_through_from_tag() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), lang);
            assert_eq!(lang.langid().to_string(), lang.tag());
        }
    }

    #[test]
    fn bilingual_selects_by_language() {
        let pair = Bilingual::new("Services", "บริการ");
        assert_eq!(pair.text(Language::En), "Services");
        assert_eq!(pair.text(Language::Th), "บริการ");
        assert_eq!(Language::Th.pick(1, 2), 2);
    }
}
