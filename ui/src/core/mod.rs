//! Platform-agnostic state and helpers behind the site's components.

pub mod carousel;
pub mod count_up;
pub mod disclosure;
pub mod format;
pub mod language;
pub mod platform;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod timing;

pub use language::{Bilingual, Language};
