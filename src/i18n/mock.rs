//! Configurable [`Translator`] test double
//!
//! Consumers depending on `dyn Translator` (or a generic `T: Translator`)
//! can inject a [`TranslatorMock`] and stub only the operations a test
//! cares about. Unstubbed operations do nothing and return empty values.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::locale::Locale;
use super::translator::Translator;
use super::Vars;
use crate::utils::errors::Result;

type SetDefaultFn = Box<dyn FnMut(Locale) + Send + Sync>;
type LoadBundleFn = Box<dyn FnMut(Locale, &Path) -> Result<()> + Send + Sync>;
type GetFn = Box<dyn Fn(&Locale, &str, Option<&Vars>) -> String + Send + Sync>;
type GetDefaultFn = Box<dyn Fn(&str, Option<&Vars>) -> String + Send + Sync>;
type GetLocalizationsFn = Box<dyn Fn(&str, Option<&Vars>) -> HashMap<Locale, String> + Send + Sync>;

/// Translator whose behaviour is supplied per method
#[derive(Default)]
pub struct TranslatorMock {
    set_default_fn: Option<SetDefaultFn>,
    load_bundle_fn: Option<LoadBundleFn>,
    get_fn: Option<GetFn>,
    get_default_fn: Option<GetDefaultFn>,
    get_localizations_fn: Option<GetLocalizationsFn>,
}

impl TranslatorMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_set_default(mut self, f: impl FnMut(Locale) + Send + Sync + 'static) -> Self {
        self.set_default_fn = Some(Box::new(f));
        self
    }

    pub fn on_load_bundle(mut self, f: impl FnMut(Locale, &Path) -> Result<()> + Send + Sync + 'static) -> Self {
        self.load_bundle_fn = Some(Box::new(f));
        self
    }

    pub fn on_get(mut self, f: impl Fn(&Locale, &str, Option<&Vars>) -> String + Send + Sync + 'static) -> Self {
        self.get_fn = Some(Box::new(f));
        self
    }

    pub fn on_get_default(mut self, f: impl Fn(&str, Option<&Vars>) -> String + Send + Sync + 'static) -> Self {
        self.get_default_fn = Some(Box::new(f));
        self
    }

    pub fn on_get_localizations(
        mut self,
        f: impl Fn(&str, Option<&Vars>) -> HashMap<Locale, String> + Send + Sync + 'static,
    ) -> Self {
        self.get_localizations_fn = Some(Box::new(f));
        self
    }
}

impl Translator for TranslatorMock {
    fn set_default(&mut self, locale: Locale) {
        if let Some(f) = self.set_default_fn.as_mut() {
            f(locale);
        }
    }

    fn load_bundle(&mut self, locale: Locale, source: &Path) -> Result<()> {
        match self.load_bundle_fn.as_mut() {
            Some(f) => f(locale, source),
            None => Ok(()),
        }
    }

    fn get(&self, locale: &Locale, key: &str, vars: Option<&Vars>) -> String {
        self.get_fn
            .as_ref()
            .map(|f| f(locale, key, vars))
            .unwrap_or_default()
    }

    fn get_default(&self, key: &str, vars: Option<&Vars>) -> String {
        self.get_default_fn
            .as_ref()
            .map(|f| f(key, vars))
            .unwrap_or_default()
    }

    fn get_localizations(&self, key: &str, vars: Option<&Vars>) -> HashMap<Locale, String> {
        self.get_localizations_fn
            .as_ref()
            .map(|f| f(key, vars))
            .unwrap_or_default()
    }
}

impl fmt::Debug for TranslatorMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorMock")
            .field("set_default", &self.set_default_fn.is_some())
            .field("load_bundle", &self.load_bundle_fn.is_some())
            .field("get", &self.get_fn.is_some())
            .field("get_default", &self.get_default_fn.is_some())
            .field("get_localizations", &self.get_localizations_fn.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::I18nError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unstubbed_mock_is_inert() {
        let mut mock = TranslatorMock::new();
        mock.set_default(Locale::CHINESE_CN);
        assert!(mock.load_bundle(Locale::SPANISH_ES, Path::new("")).is_ok());
        assert!(mock.get(&Locale::CROATIAN, "", None).is_empty());
        assert!(mock.get_default("", None).is_empty());
        assert!(mock.get_localizations("", None).is_empty());
    }

    #[test]
    fn test_every_stub_is_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = |calls: &Arc<AtomicUsize>| {
            let calls = Arc::clone(calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        };

        let (a, b, c, d, e) = (
            counter(&calls),
            counter(&calls),
            counter(&calls),
            counter(&calls),
            counter(&calls),
        );
        let mut mock = TranslatorMock::new()
            .on_set_default(move |_| a())
            .on_load_bundle(move |_, _| {
                b();
                Err(I18nError::Config("stubbed".to_string()))
            })
            .on_get(move |locale, key, _| {
                c();
                format!("{}:{}", locale, key)
            })
            .on_get_default(move |key, _| {
                d();
                key.to_uppercase()
            })
            .on_get_localizations(move |key, _| {
                e();
                HashMap::from([(Locale::FRENCH, key.to_string())])
            });

        mock.set_default(Locale::CHINESE_CN);
        assert!(mock.load_bundle(Locale::SPANISH_ES, Path::new("es.json")).is_err());
        assert_eq!(mock.get(&Locale::CROATIAN, "greet", None), "hr:greet");
        assert_eq!(mock.get_default("greet", None), "GREET");
        assert_eq!(mock.get_localizations("greet", None).get(&Locale::FRENCH).unwrap(), "greet");

        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mock = TranslatorMock::new().on_get_default(|key, _| format!("[{}]", key));
        let translator: Box<dyn Translator> = Box::new(mock);
        assert_eq!(translator.get_default("title", None), "[title]");
    }
}
