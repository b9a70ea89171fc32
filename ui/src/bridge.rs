//! Browser signals for the navigation bar.
//!
//! A single `document::eval` script registers the scroll/resize listeners and
//! two `IntersectionObserver`s (page sections and reveal targets), then
//! streams JSON messages back. The script is started when the navigation bar
//! mounts and torn down when it unmounts. If the script can't be started or
//! its channel breaks, [`NavSignal::Unavailable`] is delivered once so the
//! page can show everything instead of waiting for reveals forever.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::reveal::RevealTarget;
use crate::core::sections::Section;
use crate::error::{Result, SiteError};

const NAV_OBSERVER_JS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/js/nav_observer.js"
));

const TEARDOWN_JS: &str = "if (typeof window.__chanmrNavTeardown === 'function') window.__chanmrNavTeardown();";

/// Raw message as sent by the observer script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BridgeMessage {
    Scroll { y: f64 },
    Viewport { width: f64 },
    Section { id: String, intersecting: bool },
    Reveal { id: String },
}

/// A decoded browser event the navigation bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavSignal {
    Scrolled(f64),
    Resized(f64),
    Intersection { section: Section, intersecting: bool },
    Revealed(RevealTarget),
    /// The observer script could not run; nothing more will arrive.
    Unavailable,
}

/// What the observer script watches, and at which intersection ratios.
#[derive(Debug, Clone, Copy)]
pub struct ObservedTargets {
    pub sections: &'static [Section],
    pub section_threshold: f64,
    pub reveals: &'static [RevealTarget],
    pub reveal_threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserverSetup {
    ids: Vec<&'static str>,
    threshold: f64,
    reveal_ids: Vec<&'static str>,
    reveal_threshold: f64,
}

impl From<ObservedTargets> for ObserverSetup {
    fn from(targets: ObservedTargets) -> Self {
        Self {
            ids: targets.sections.iter().map(|s| s.dom_id()).collect(),
            threshold: targets.section_threshold,
            reveal_ids: targets.reveals.iter().map(|t| t.dom_id()).collect(),
            reveal_threshold: targets.reveal_threshold,
        }
    }
}

impl TryFrom<BridgeMessage> for NavSignal {
    type Error = SiteError;

    fn try_from(msg: BridgeMessage) -> Result<Self> {
        Ok(match msg {
            BridgeMessage::Scroll { y } => NavSignal::Scrolled(y),
            BridgeMessage::Viewport { width } => NavSignal::Resized(width),
            BridgeMessage::Section { id, intersecting } => {
                let section = Section::from_dom_id(&id).ok_or(SiteError::UnknownSection(id))?;
                NavSignal::Intersection {
                    section,
                    intersecting,
                }
            }
            BridgeMessage::Reveal { id } => {
                let target =
                    RevealTarget::from_dom_id(&id).ok_or(SiteError::UnknownRevealTarget(id))?;
                NavSignal::Revealed(target)
            }
        })
    }
}

pub fn decode(value: serde_json::Value) -> Result<NavSignal> {
    let msg: BridgeMessage =
        serde_json::from_value(value).map_err(|err| SiteError::Bridge(err.to_string()))?;
    NavSignal::try_from(msg)
}

/// Subscribe to scroll, viewport, section-intersection and reveal signals
/// for the lifetime of the calling component. `on_signal` runs for every
/// decoded event; malformed messages are logged and skipped.
pub fn use_nav_signals(targets: ObservedTargets, on_signal: Callback<NavSignal>) {
    use_future(move || async move {
        if let Err(err) = run_observer(targets, on_signal).await {
            tracing::warn!("[bridge] {err}; showing all content without observers");
            on_signal.call(NavSignal::Unavailable);
        }
    });

    use_drop(|| {
        let _ = document::eval(TEARDOWN_JS);
    });
}

async fn run_observer(targets: ObservedTargets, on_signal: Callback<NavSignal>) -> Result<()> {
    let mut eval = document::eval(NAV_OBSERVER_JS);
    eval.send(ObserverSetup::from(targets))
        .map_err(|err| SiteError::Bridge(format!("{err:?}")))?;
    tracing::debug!(
        "[bridge] observing {} sections and {} reveal targets",
        targets.sections.len(),
        targets.reveals.len()
    );

    loop {
        let value: serde_json::Value = eval
            .recv()
            .await
            .map_err(|err| SiteError::Bridge(format!("{err:?}")))?;
        match decode(value) {
            Ok(signal) => on_signal.call(signal),
            Err(err) => tracing::debug!("[bridge] skipped message: {err}"),
        }
    }
}
