//! Scroll-position tracking for the sticky navigation bar.

use crate::config::NavThresholds;

/// What the navigation bar should look like for the latest scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavVisibility {
    /// Past the shadow threshold; the bar gets a stronger backdrop.
    pub scrolled: bool,
    /// The top info bar (jobs / e-brochure / language) is collapsed.
    pub top_bar_hidden: bool,
    /// The secondary section-link bar is revealed.
    pub secondary_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    thresholds: NavThresholds,
    last_y: f64,
    state: NavVisibility,
}

impl ScrollTracker {
    pub fn new(thresholds: NavThresholds) -> Self {
        Self {
            thresholds,
            last_y: 0.0,
            state: NavVisibility::default(),
        }
    }

    pub fn state(&self) -> NavVisibility {
        self.state
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Feed a new vertical scroll offset. Moving down past the collapse
    /// threshold hides the top bar, any upward movement restores it.
    pub fn observe(&mut self, y: f64) -> NavVisibility {
        let y = if y.is_finite() { y.max(0.0) } else { self.last_y };
        let t = &self.thresholds;

        if y > self.last_y && y > t.collapse {
            self.state.top_bar_hidden = true;
        } else if y < self.last_y {
            self.state.top_bar_hidden = false;
        }

        self.state.scrolled = y > t.scrolled;
        self.state.secondary_visible = y > t.secondary;
        self.last_y = y;
        self.state
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(NavThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(NavThresholds {
            scrolled: 50.0,
            collapse: 60.0,
            secondary: 100.0,
        })
    }

    #[test]
    fn starts_expanded() {
        let t = tracker();
        assert_eq!(t.state(), NavVisibility::default());
    }

    #[test]
    fn small_scroll_does_not_collapse() {
        let mut t = tracker();
        let s = t.observe(40.0);
        assert!(!s.top_bar_hidden);
        assert!(!s.scrolled);
        assert!(!s.secondary_visible);
    }

    #[test]
    fn scrolling_down_past_threshold_collapses_then_reveals_secondary() {
        let mut t = tracker();
        let s = t.observe(80.0);
        assert!(s.top_bar_hidden);
        assert!(s.scrolled);
        assert!(!s.secondary_visible);

        let s = t.observe(150.0);
        assert!(s.top_bar_hidden);
        assert!(s.secondary_visible);
    }

    #[test]
    fn scrolling_back_up_restores_top_bar() {
        let mut t = tracker();
        t.observe(300.0);
        let s = t.observe(20.0);
        assert!(!s.top_bar_hidden);
        assert!(!s.secondary_visible);
        assert!(!s.scrolled);
    }

    #[test]
    fn any_upward_movement_restores_even_deep_in_page() {
        let mut t = tracker();
        t.observe(900.0);
        let s = t.observe(880.0);
        assert!(!s.top_bar_hidden);
        assert!(s.secondary_visible);
    }

    #[test]
    fn unchanged_position_keeps_collapse_state() {
        let mut t = tracker();
        t.observe(500.0);
        assert!(t.observe(500.0).top_bar_hidden);
        t.observe(450.0);
        assert!(!t.observe(450.0).top_bar_hidden);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut t = tracker();
        t.observe(200.0);
        let s = t.observe(f64::NAN);
        assert_eq!(t.last_y(), 200.0);
        assert!(s.secondary_visible);
    }
}
