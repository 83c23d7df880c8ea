//! Translation resolution
//!
//! [`BundleTranslator`] owns the locale to bundle table and resolves keys
//! with locale fallback, random variant selection and interpolation.
//!
//! Usage follows two phases. During setup the owner calls
//! [`Translator::set_default`] and [`Translator::load_bundle`], which need
//! `&mut self`. Afterwards the translator is shared (`Arc`, a static, or
//! [`crate::i18n::global`]) and only the `&self` lookups are reachable, so
//! bundles cannot be swapped while lookups are running.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{warn, Dispatch};

use super::bundle::{Bundle, SourceFormat};
use super::locale::Locale;
use super::template;
use super::Vars;
use crate::config::validation::validate_i18n_config;
use crate::config::I18nConfig;
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging::{log_bundle_failed, log_bundle_loaded, log_fallback, log_render_failure};

/// The operations every translator offers
pub trait Translator: Send + Sync {
    /// Overwrite the locale used as a fallback
    fn set_default(&mut self, locale: Locale);

    /// Map `locale` to the bundle stored at `source`.
    ///
    /// A source already parsed for another locale is shared, not read again.
    fn load_bundle(&mut self, locale: Locale, source: &Path) -> Result<()>;

    /// Translate `key` for `locale`.
    ///
    /// Falls back to the default locale, then to `key` itself. When several
    /// candidates exist one is picked at random. Never fails.
    fn get(&self, locale: &Locale, key: &str, vars: Option<&Vars>) -> String;

    /// Translate `key` for the default locale
    fn get_default(&self, key: &str, vars: Option<&Vars>) -> String;

    /// Translate `key` for every loaded locale
    fn get_localizations(&self, key: &str, vars: Option<&Vars>) -> HashMap<Locale, String>;
}

/// Source of randomness for candidate selection
#[derive(Debug)]
enum CandidatePicker {
    Thread,
    Seeded(Mutex<StdRng>),
}

impl CandidatePicker {
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        let index = match (candidates.len(), self) {
            (0 | 1, _) => 0,
            (len, CandidatePicker::Thread) => rand::thread_rng().gen_range(0..len),
            (len, CandidatePicker::Seeded(rng)) => rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .gen_range(0..len),
        };
        candidates.get(index).map(String::as_str).unwrap_or_default()
    }
}

/// Why a locale could not answer a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupMiss {
    BundleNotLoaded,
    KeyNotFound,
}

impl LookupMiss {
    fn reason(self) -> &'static str {
        match self {
            LookupMiss::BundleNotLoaded => "Bundle is not loaded",
            LookupMiss::KeyNotFound => "No label found for key",
        }
    }
}

/// Translator backed by flattened bundles
#[derive(Debug)]
pub struct BundleTranslator {
    default_locale: Locale,
    translations: HashMap<Locale, Arc<Bundle>>,
    loaded_bundles: HashMap<PathBuf, Arc<Bundle>>,
    picker: CandidatePicker,
    dispatch: Dispatch,
}

impl Default for BundleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleTranslator {
    /// Create an empty translator.
    ///
    /// The default locale is [`Locale::ENGLISH_US`], candidates are picked
    /// with the thread-local RNG and diagnostics are discarded.
    pub fn new() -> Self {
        Self {
            default_locale: Locale::default(),
            translations: HashMap::new(),
            loaded_bundles: HashMap::new(),
            picker: CandidatePicker::Thread,
            dispatch: Dispatch::none(),
        }
    }

    /// Build a translator from configuration and load every configured bundle
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let mut translator = Self::new();
        translator.load_config(config)?;
        Ok(translator)
    }

    pub fn with_default(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Pick candidates from a seeded RNG, making selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.picker = CandidatePicker::Seeded(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Send diagnostics to `dispatch` instead of discarding them
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Replace the diagnostic sink, keeping every loaded bundle
    pub fn set_dispatch(&mut self, dispatch: Dispatch) {
        self.dispatch = dispatch;
    }

    /// Apply configuration: default locale, seed and bundles.
    ///
    /// The configuration is validated first and nothing is applied when it
    /// is rejected. A bundle that fails to load is skipped, unless it
    /// belongs to the default locale.
    pub fn load_config(&mut self, config: &I18nConfig) -> Result<()> {
        validate_i18n_config(config)?;

        self.default_locale = config.default_locale.clone();
        if let Some(seed) = config.seed {
            self.picker = CandidatePicker::Seeded(Mutex::new(StdRng::seed_from_u64(seed)));
        }

        for source in &config.bundles {
            match self.load_bundle(source.locale.clone(), &source.path) {
                Ok(()) => {}
                Err(err) if source.locale == self.default_locale => return Err(err),
                Err(_) => {}
            }
        }

        if !self.translations.contains_key(&self.default_locale) {
            self.in_dispatch(|| {
                warn!(
                    locale = %self.default_locale,
                    "No bundle configured for the default locale, missing keys will be returned verbatim"
                )
            });
        }

        Ok(())
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales that currently have a bundle
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.translations.keys()
    }

    /// Bundle mapped to `locale`, shared with every locale using the same source
    pub fn bundle(&self, locale: &Locale) -> Option<Arc<Bundle>> {
        self.translations.get(locale).cloned()
    }

    /// Number of distinct sources parsed so far
    pub fn loaded_sources(&self) -> usize {
        self.loaded_bundles.len()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let mut locales: Vec<LocaleStats> = self
            .translations
            .iter()
            .map(|(locale, bundle)| LocaleStats {
                locale: locale.clone(),
                key_count: bundle.len(),
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        TranslationStats {
            total_keys: self
                .translations
                .get(&self.default_locale)
                .map_or(0, |bundle| bundle.len()),
            shared_sources: self.loaded_bundles.len(),
            locales,
        }
    }

    fn in_dispatch<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    fn read_bundle(path: &Path) -> Result<Bundle> {
        let bytes = std::fs::read(path).map_err(|e| I18nError::read(path, e))?;
        Bundle::from_slice(&bytes, SourceFormat::from_path(path)).map_err(|e| I18nError::decode(path, e))
    }

    fn map_bundle(&mut self, locale: Locale, path: &Path) -> Result<()> {
        if let Some(bundle) = self.loaded_bundles.get(path) {
            let bundle = Arc::clone(bundle);
            log_bundle_loaded(&locale, path, bundle.len(), true);
            self.translations.insert(locale, bundle);
            return Ok(());
        }

        let bundle = match Self::read_bundle(path) {
            Ok(bundle) => Arc::new(bundle),
            Err(err) => {
                log_bundle_failed(&locale, path, &err);
                return Err(err);
            }
        };

        log_bundle_loaded(&locale, path, bundle.len(), false);
        self.loaded_bundles.insert(path.to_path_buf(), Arc::clone(&bundle));
        self.translations.insert(locale, bundle);
        Ok(())
    }

    fn lookup(&self, locale: &Locale, key: &str) -> std::result::Result<&[String], LookupMiss> {
        self.translations
            .get(locale)
            .ok_or(LookupMiss::BundleNotLoaded)?
            .get(key)
            .ok_or(LookupMiss::KeyNotFound)
    }

    fn translate(&self, locale: &Locale, key: &str, vars: Option<&Vars>) -> std::result::Result<String, LookupMiss> {
        let candidates = self.lookup(locale, key)?;
        let raw = self.picker.pick(candidates);
        Ok(self.interpolate(locale, key, raw, vars))
    }

    fn interpolate(&self, locale: &Locale, key: &str, raw: &str, vars: Option<&Vars>) -> String {
        let Some(vars) = vars.filter(|vars| !vars.is_empty()) else {
            return raw.to_string();
        };
        if !template::has_actions(raw) {
            return raw.to_string();
        }

        match template::render(raw, vars) {
            Ok(rendered) => rendered,
            Err(err) => {
                log_render_failure(locale, key, &err);
                raw.to_string()
            }
        }
    }

    fn resolve(&self, locale: &Locale, key: &str, vars: Option<&Vars>) -> String {
        let miss = match self.translate(locale, key, vars) {
            Ok(text) => return text,
            Err(miss) => miss,
        };

        if *locale == self.default_locale {
            log_fallback(locale, key, miss.reason(), None);
            return key.to_string();
        }

        log_fallback(locale, key, miss.reason(), Some(&self.default_locale));
        match self.translate(&self.default_locale, key, vars) {
            Ok(text) => text,
            Err(miss) => {
                log_fallback(&self.default_locale, key, miss.reason(), None);
                key.to_string()
            }
        }
    }
}

impl Translator for BundleTranslator {
    fn set_default(&mut self, locale: Locale) {
        self.default_locale = locale;
    }

    fn load_bundle(&mut self, locale: Locale, source: &Path) -> Result<()> {
        let dispatch = self.dispatch.clone();
        tracing::dispatcher::with_default(&dispatch, || self.map_bundle(locale, source))
    }

    fn get(&self, locale: &Locale, key: &str, vars: Option<&Vars>) -> String {
        self.in_dispatch(|| self.resolve(locale, key, vars))
    }

    fn get_default(&self, key: &str, vars: Option<&Vars>) -> String {
        self.get(&self.default_locale, key, vars)
    }

    fn get_localizations(&self, key: &str, vars: Option<&Vars>) -> HashMap<Locale, String> {
        self.in_dispatch(|| {
            self.translations
                .keys()
                .map(|locale| (locale.clone(), self.resolve(locale, key, vars)))
                .collect()
        })
    }
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    /// Per-locale key counts, sorted by locale
    pub locales: Vec<LocaleStats>,
    /// Key count of the default locale
    pub total_keys: usize,
    /// Distinct sources backing the locales
    pub shared_sources: usize,
}

/// Locale-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: Locale,
    pub key_count: usize,
}
