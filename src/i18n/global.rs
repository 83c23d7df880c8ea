//! Process-wide translator
//!
//! Convenience wrapper for applications that want free functions instead
//! of passing a translator around. Configure a [`BundleTranslator`] first,
//! then [`install`] it once; the lookups below delegate to it.
//!
//! ```rust,ignore
//! use locale_bundles::i18n::{global, BundleTranslator, Locale, Translator};
//!
//! let mut translator = BundleTranslator::new();
//! translator.load_bundle(Locale::ENGLISH_US, "translations/en.json".as_ref())?;
//! global::install(translator)?;
//!
//! let text = global::get(&Locale::FRENCH, "greet", None);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use super::locale::Locale;
use super::translator::{BundleTranslator, Translator};
use super::{merge_vars, Vars};
use crate::utils::errors::{I18nError, Result};

static INSTANCE: OnceLock<BundleTranslator> = OnceLock::new();

/// Install the process-wide translator. Only the first call succeeds.
pub fn install(translator: BundleTranslator) -> Result<()> {
    INSTANCE.set(translator).map_err(|_| I18nError::AlreadyInstalled)
}

/// The installed translator, if any
pub fn try_translator() -> Option<&'static BundleTranslator> {
    INSTANCE.get()
}

/// The installed translator, or an empty one before [`install`] has run
pub fn translator() -> &'static BundleTranslator {
    static EMPTY: OnceLock<BundleTranslator> = OnceLock::new();
    match INSTANCE.get() {
        Some(translator) => translator,
        None => {
            warn!("No translator installed, lookups return their key");
            EMPTY.get_or_init(BundleTranslator::new)
        }
    }
}

/// Translate `key` for `locale`, see [`Translator::get`]
pub fn get(locale: &Locale, key: &str, vars: Option<&Vars>) -> String {
    translator().get(locale, key, vars)
}

/// Translate `key` for `locale` with several variable maps merged in
/// order, later maps overriding earlier ones
pub fn get_with(locale: &Locale, key: &str, sets: &[&Vars]) -> String {
    let merged = merge_vars(sets.iter().copied());
    translator().get(locale, key, Some(&merged))
}

/// Translate `key` for the default locale, see [`Translator::get_default`]
pub fn get_default(key: &str, vars: Option<&Vars>) -> String {
    translator().get_default(key, vars)
}

/// Translate `key` for every loaded locale, see [`Translator::get_localizations`]
pub fn get_localizations(key: &str, vars: Option<&Vars>) -> HashMap<Locale, String> {
    translator().get_localizations(key, vars)
}
