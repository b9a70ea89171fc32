//! Site-wide tunables: scroll thresholds, autoplay periods, breakpoints and
//! outbound links.
//!
//! The values ship embedded from `assets/site.json`. Every field carries a
//! serde default, so a partial file only overrides what it names. A file
//! that fails to parse is logged and replaced by [`SiteConfig::default`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(EMBEDDED_CONFIG) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!("[config] {err}; using built-in defaults");
        SiteConfig::default()
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company_name: String,
    pub legal_name: String,
    pub nav: NavThresholds,
    pub autoplay: AutoplayPeriods,
    pub news_breakpoint_px: f64,
    pub reveal: RevealStagger,
    pub count_up_ms: u64,
    /// Extra intersection ratio at which a section reasserts itself as
    /// active. Any visible pixel already counts, so sections taller than the
    /// viewport still activate.
    pub section_visibility_threshold: f64,
    /// Fraction of a reveal target that must be on screen before it fades in.
    pub reveal_visibility_threshold: f64,
    pub social: SocialLinks,
}

/// Scroll offsets (px) at which the navigation bar changes shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavThresholds {
    pub scrolled: f64,
    pub collapse: f64,
    pub secondary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayPeriods {
    pub hero_ms: u64,
    pub who_we_are_ms: u64,
    pub progress_ms: u64,
    pub culture_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealStagger {
    pub services_stagger_ms: u64,
    pub news_stagger_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub youtube: String,
    pub phone: String,
}

impl SiteConfig {
    /// The embedded configuration, parsed once.
    pub fn global() -> &'static SiteConfig {
        &CONFIG
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Autoplay periods shorter than a second would make slides unreadable.
    fn sanitized(mut self) -> Self {
        let floor = |ms: u64| ms.max(1_000);
        self.autoplay = AutoplayPeriods {
            hero_ms: floor(self.autoplay.hero_ms),
            who_we_are_ms: floor(self.autoplay.who_we_are_ms),
            progress_ms: floor(self.autoplay.progress_ms),
            culture_ms: floor(self.autoplay.culture_ms),
        };
        self.section_visibility_threshold = self.section_visibility_threshold.clamp(0.0, 1.0);
        self.reveal_visibility_threshold = self.reveal_visibility_threshold.clamp(0.0, 1.0);
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "CHAN MR Group".to_string(),
            legal_name: "CHANMR Co., Ltd.".to_string(),
            nav: NavThresholds::default(),
            autoplay: AutoplayPeriods::default(),
            news_breakpoint_px: 768.0,
            reveal: RevealStagger::default(),
            count_up_ms: 2_000,
            section_visibility_threshold: 0.3,
            reveal_visibility_threshold: 0.1,
            social: SocialLinks::default(),
        }
    }
}

impl Default for NavThresholds {
    fn default() -> Self {
        Self {
            scrolled: 50.0,
            collapse: 60.0,
            secondary: 100.0,
        }
    }
}

impl Default for AutoplayPeriods {
    fn default() -> Self {
        Self {
            hero_ms: 7_000,
            who_we_are_ms: 5_000,
            progress_ms: 10_000,
            culture_ms: 6_000,
        }
    }
}

impl Default for RevealStagger {
    fn default() -> Self {
        Self {
            services_stagger_ms: 100,
            news_stagger_ms: 150,
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: "https://www.facebook.com/ChanMR.GROUP/".to_string(),
            youtube: "https://www.youtube.com/channel/UCEq-QMRClwE9kVxWHc82hVw".to_string(),
            phone: "tel:+6621234567".to_string(),
        }
    }
}
