//! Named page sections observed for nav highlighting.

use crate::core::language::{Bilingual, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    WhoWeAre,
    Core,
    Services,
    News,
    Faq,
}

impl Section {
    /// Page order, which is also the order of the secondary nav links.
    pub const ALL: [Section; 5] = [
        Section::WhoWeAre,
        Section::Core,
        Section::Services,
        Section::News,
        Section::Faq,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Section::WhoWeAre => "who-we-are",
            Section::Core => "core",
            Section::Services => "services",
            Section::News => "news",
            Section::Faq => "faq",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.dom_id())
    }

    pub fn nav_label(self, lang: Language) -> &'static str {
        let label = match self {
            Section::WhoWeAre => Bilingual::new("Who we are", "เราคือใคร"),
            Section::Core => Bilingual::new("How we help", "เราช่วยอย่างไร"),
            Section::Services => Bilingual::new("Our expertise", "ความเชี่ยวชาญ"),
            Section::News => Bilingual::new("Customer stories", "เรื่องราวลูกค้า"),
            Section::Faq => Bilingual::new("Q&A", "คำถาม"),
        };
        label.text(lang)
    }
}

/// Remembers which section most recently reported an intersection.
///
/// Two sections can intersect at once; whichever callback arrives last wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<Section>,
}

impl SectionTracker {
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    /// Returns true when the active section changed.
    pub fn observe(&mut self, section: Section, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        if self.active == Some(section) {
            return false;
        }
        self.active = Some(section);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in Section::ALL {
            assert!(seen.insert(s.dom_id()));
            assert_eq!(Section::from_dom_id(s.dom_id()), Some(s));
        }
        assert_eq!(Section::from_dom_id("footer"), None);
    }

    #[test]
    fn labels_exist_in_both_languages() {
        for s in Section::ALL {
            for lang in Language::ALL {
                assert!(!s.nav_label(lang).trim().is_empty());
            }
            assert_ne!(s.nav_label(Language::En), s.nav_label(Language::Th));
        }
    }

    #[test]
    fn intersecting_section_becomes_active() {
        let mut t = SectionTracker::default();
        assert_eq!(t.active(), None);
        assert!(t.observe(Section::Services, true));
        assert!(t.is_active(Section::Services));
    }

    #[test]
    fn leaving_does_not_clear_active() {
        let mut t = SectionTracker::default();
        t.observe(Section::News, true);
        assert!(!t.observe(Section::News, false));
        assert_eq!(t.active(), Some(Section::News));
    }

    #[test]
    fn tall_section_activates_on_its_first_entry() {
        // A section taller than the viewport only ever reports the zero
        // crossing; that alone has to be enough.
        let mut t = SectionTracker::default();
        t.observe(Section::Services, true);
        assert!(t.observe(Section::News, true));
        assert!(t.is_active(Section::News));
        assert!(!t.observe(Section::Services, false));
        assert!(t.is_active(Section::News));
    }

    #[test]
    fn most_recent_intersection_wins() {
        let mut t = SectionTracker::default();
        t.observe(Section::Core, true);
        t.observe(Section::Services, true);
        assert_eq!(t.active(), Some(Section::Services));
        t.observe(Section::Core, true);
        assert_eq!(t.active(), Some(Section::Core));
        assert!(!t.observe(Section::Core, true));
    }
}
