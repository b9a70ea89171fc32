//! Open/closed bookkeeping for the nav dropdowns and the FAQ accordion.
//! Both allow at most one open item; toggling the open one closes it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Main-menu dropdown state plus the mobile menu flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    dropdown: Accordion,
    mobile_open: bool,
}

impl MenuState {
    pub fn active(&self) -> Option<usize> {
        self.dropdown.open()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.dropdown.is_open(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.dropdown.toggle(index);
    }

    /// Click landed outside the open dropdown.
    pub fn close(&mut self) {
        self.dropdown.close();
    }

    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
        if self.mobile_open {
            self.dropdown.close();
        }
    }
}
