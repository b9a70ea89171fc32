//! Error type shared by configuration loading, localisation and the DOM bridge.
//!
//! Nothing here is fatal: callers log the error and fall back to defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to select localisation bundle: {0}")]
    I18n(#[from] i18n_embed::I18nEmbedError),

    #[error("DOM bridge failed: {0}")]
    Bridge(String),

    #[error("unknown page section `{0}`")]
    UnknownSection(String),

    #[error("unknown reveal target `{0}`")]
    UnknownRevealTarget(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
