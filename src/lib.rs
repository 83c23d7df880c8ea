//! locale-bundles
//!
//! Translation lookup for chat bots and other multi-locale services.
//! Bundles are JSON or TOML documents flattened into dotted keys; lookups
//! fall back to a default locale, pick randomly among variant phrasings
//! and interpolate `{{.Variable}}` actions.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{merge_vars, BundleTranslator, Locale, Translator, TranslatorMock, Vars};

