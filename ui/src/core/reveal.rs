//! Blocks that fade in (or start counting) the first time they scroll into
//! view.
//!
//! Each target is observed on its own element rather than through the
//! enclosing page section, so a section taller than the viewport still
//! reveals its cards.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Quote,
    Figures,
    Services,
    News,
    Connect,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 5] = [
        RevealTarget::Quote,
        RevealTarget::Figures,
        RevealTarget::Services,
        RevealTarget::News,
        RevealTarget::Connect,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            RevealTarget::Quote => "reveal-quote",
            RevealTarget::Figures => "reveal-figures",
            RevealTarget::Services => "reveal-services",
            RevealTarget::News => "reveal-news",
            RevealTarget::Connect => "reveal-connect",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.dom_id() == id)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Targets that have been on screen at least once. Never shrinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealSet(u8);

impl RevealSet {
    /// Everything shown, used when visibility can't be observed at all.
    pub fn all() -> Self {
        Self(RevealTarget::ALL.iter().fold(0, |bits, t| bits | t.bit()))
    }

    pub fn is_revealed(self, target: RevealTarget) -> bool {
        self.0 & target.bit() != 0
    }

    /// Returns true the first time a target is revealed.
    pub fn reveal(&mut self, target: RevealTarget) -> bool {
        let before = self.0;
        self.0 |= target.bit();
        before != self.0
    }
}

/// Class list for a block that fades in once revealed.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal reveal--in")
    } else {
        format!("{base} reveal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_round_trip_and_are_unique() {
        let mut ids = std::collections::HashSet::new();
        for t in RevealTarget::ALL {
            assert!(ids.insert(t.dom_id()));
            assert_eq!(RevealTarget::from_dom_id(t.dom_id()), Some(t));
        }
        assert_eq!(RevealTarget::from_dom_id("news"), None);
    }

    #[test]
    fn nothing_is_revealed_initially() {
        let set = RevealSet::default();
        assert!(RevealTarget::ALL.iter().all(|t| !set.is_revealed(*t)));
    }

    #[test]
    fn reveal_is_sticky_and_reports_first_time_only() {
        let mut set = RevealSet::default();
        assert!(set.reveal(RevealTarget::News));
        assert!(!set.reveal(RevealTarget::News));
        assert!(set.is_revealed(RevealTarget::News));
        assert!(!set.is_revealed(RevealTarget::Services));
    }

    #[test]
    fn all_reveals_every_target() {
        let set = RevealSet::all();
        for t in RevealTarget::ALL {
            assert!(set.is_revealed(t), "{t:?}");
        }
    }

    #[test]
    fn class_list_gains_the_entered_modifier() {
        assert_eq!(reveal_class("quote", false), "quote reveal");
        assert_eq!(reveal_class("quote", true), "quote reveal reveal--in");
    }
}
