//! Index bookkeeping for the hero, slide, culture and news carousels.
//!
//! A carousel shows `window` consecutive items starting at `index`. The last
//! valid start is `len - window`; `Wrap` carousels cycle back to the first
//! item past it, `Clamp` carousels stop there.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Wrap,
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    window: usize,
    boundary: Boundary,
}

impl Carousel {
    pub fn new(len: usize, boundary: Boundary) -> Self {
        Self {
            len,
            index: 0,
            window: 1,
            boundary,
        }
    }

    pub fn wrapping(len: usize) -> Self {
        Self::new(len, Boundary::Wrap)
    }

    pub fn clamped(len: usize, window: usize) -> Self {
        let mut carousel = Self::new(len, Boundary::Clamp);
        carousel.set_window(window);
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Highest index a window may start at.
    pub fn last_start(&self) -> usize {
        self.len.saturating_sub(self.window)
    }

    pub fn advance(&mut self) -> usize {
        let last = self.last_start();
        self.index = match self.boundary {
            Boundary::Wrap => (self.index + 1) % (last + 1),
            Boundary::Clamp => (self.index + 1).min(last),
        };
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        let last = self.last_start();
        self.index = match self.boundary {
            Boundary::Wrap if self.index == 0 => last,
            Boundary::Wrap => self.index - 1,
            Boundary::Clamp => self.index.saturating_sub(1),
        };
        self.index
    }

    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.last_start());
        self.index
    }

    /// Change how many items are visible at once. The window never exceeds
    /// the item count and never drops below one.
    pub fn set_window(&mut self, window: usize) {
        self.window = window.clamp(1, self.len.max(1));
        self.index = self.index.min(self.last_start());
    }

    pub fn can_advance(&self) -> bool {
        match self.boundary {
            Boundary::Wrap => self.last_start() > 0,
            Boundary::Clamp => self.index < self.last_start(),
        }
    }

    pub fn can_retreat(&self) -> bool {
        match self.boundary {
            Boundary::Wrap => self.last_start() > 0,
            Boundary::Clamp => self.index > 0,
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    /// Whether `index` falls inside the currently visible window.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.index && index < self.index + self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_advance_cycles() {
        let mut c = Carousel::wrapping(3);
        assert_eq!(c.advance(), 1);
        assert_eq!(c.advance(), 2);
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn wrapping_retreat_cycles_to_end() {
        let mut c = Carousel::wrapping(4);
        assert_eq!(c.retreat(), 3);
        assert_eq!(c.retreat(), 2);
    }

    #[test]
    fn clamped_stops_at_last_window_start() {
        let mut c = Carousel::clamped(6, 3);
        assert!(!c.can_retreat());
        for _ in 0..10 {
            c.advance();
        }
        assert_eq!(c.index(), 3);
        assert!(!c.can_advance());
        assert!(c.can_retreat());
        for _ in 0..10 {
            c.retreat();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn narrowing_the_window_keeps_position_and_widening_clamps_it() {
        let mut c = Carousel::clamped(6, 1);
        c.select(5);
        assert_eq!(c.index(), 5);
        c.set_window(3);
        assert_eq!(c.index(), 3);
        c.set_window(1);
        assert_eq!(c.index(), 3);
        c.set_window(100);
        assert_eq!(c.window(), 6);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn select_is_clamped() {
        let mut c = Carousel::wrapping(3);
        assert_eq!(c.select(7), 2);
        assert!(c.is_current(2));
    }

    #[test]
    fn single_item_never_moves() {
        let mut c = Carousel::wrapping(1);
        assert!(!c.can_advance());
        assert_eq!(c.advance(), 0);
        assert_eq!(c.retreat(), 0);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let mut c = Carousel::clamped(0, 3);
        assert!(c.is_empty());
        assert_eq!(c.advance(), 0);
        assert_eq!(c.retreat(), 0);
        assert_eq!(c.window(), 1);
    }

    #[test]
    fn visible_window_tracks_index() {
        let mut c = Carousel::clamped(6, 3);
        c.advance();
        assert!(!c.is_visible(0));
        assert!(c.is_visible(1));
        assert!(c.is_visible(3));
        assert!(!c.is_visible(4));
    }

    /// Drives every carousel shape through a long pseudo-random operation
    /// sequence and checks the index never escapes `[0, len - 1]`.
    #[test]
    fn index_stays_in_bounds_for_any_operation_sequence() {
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        for len in 0..8usize {
            for boundary in [Boundary::Wrap, Boundary::Clamp] {
                let mut c = Carousel::new(len, boundary);
                for _ in 0..500 {
                    let op = next() % 4;
                    match op {
                        0 => {
                            c.advance();
                        }
                        1 => {
                            c.retreat();
                        }
                        2 => {
                            let target = (next() % 16) as usize;
                            c.select(target);
                        }
                        _ => {
                            let window = (next() % 5) as usize;
                            c.set_window(window);
                        }
                    }
                    assert!(c.index() <= len.saturating_sub(1), "{c:?}");
                    assert!(c.index() <= c.last_start(), "{c:?}");
                }
            }
        }
    }
}
