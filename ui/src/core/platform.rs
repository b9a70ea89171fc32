//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Items the news strip shows side by side at a given viewport width.
pub fn news_window(viewport_width: f64, breakpoint: f64) -> usize {
    if viewport_width <= breakpoint {
        1
    } else {
        3
    }
}
