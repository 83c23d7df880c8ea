//! Internationalization module
//!
//! This module handles bundle loading and translation lookup: flattening
//! translation documents, locale fallback, random variant selection and
//! variable interpolation.

pub mod bundle;
pub mod global;
pub mod locale;
pub mod mock;
pub mod template;
pub mod translator;

pub use serde_json::Value;

/// Variables injected into a translation during interpolation
pub type Vars = serde_json::Map<String, Value>;

// Re-export commonly used i18n components
pub use bundle::{Bundle, SourceFormat};
pub use locale::Locale;
pub use mock::TranslatorMock;
pub use template::RenderError;
pub use translator::{BundleTranslator, LocaleStats, TranslationStats, Translator};

/// Merge several variable maps into one. When a name appears more than
/// once, the later map wins.
pub fn merge_vars<'a, I>(sets: I) -> Vars
where
    I: IntoIterator<Item = &'a Vars>,
{
    let mut merged = Vars::new();
    for set in sets {
        merged.extend(set.iter().map(|(name, value)| (name.clone(), value.clone())));
    }
    merged
}

/// Build a [`Vars`] map from `name => value` pairs.
///
/// ```rust
/// let vars = locale_bundles::vars! { "Name" => "Ada", "Count" => 3 };
/// assert_eq!(vars["Count"], 3);
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::i18n::Vars::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::i18n::Vars::new();
        $(
            vars.insert(::std::string::String::from($name), $crate::i18n::Value::from($value));
        )+
        vars
    }};
}
