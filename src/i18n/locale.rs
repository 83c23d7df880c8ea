//! Locale identifiers
//!
//! A [`Locale`] is an opaque tag supplied by the host platform. The crate
//! only compares and hashes it; nothing looks inside the string.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale identifier (e.g. `"en-US"`, `"fr"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

impl Locale {
    pub const BULGARIAN: Locale = Locale::from_static("bg");
    pub const CHINESE_CN: Locale = Locale::from_static("zh-CN");
    pub const CHINESE_TW: Locale = Locale::from_static("zh-TW");
    pub const CROATIAN: Locale = Locale::from_static("hr");
    pub const CZECH: Locale = Locale::from_static("cs");
    pub const DANISH: Locale = Locale::from_static("da");
    pub const DUTCH: Locale = Locale::from_static("nl");
    pub const ENGLISH_GB: Locale = Locale::from_static("en-GB");
    pub const ENGLISH_US: Locale = Locale::from_static("en-US");
    pub const FINNISH: Locale = Locale::from_static("fi");
    pub const FRENCH: Locale = Locale::from_static("fr");
    pub const GERMAN: Locale = Locale::from_static("de");
    pub const GREEK: Locale = Locale::from_static("el");
    pub const HINDI: Locale = Locale::from_static("hi");
    pub const HUNGARIAN: Locale = Locale::from_static("hu");
    pub const ITALIAN: Locale = Locale::from_static("it");
    pub const JAPANESE: Locale = Locale::from_static("ja");
    pub const KOREAN: Locale = Locale::from_static("ko");
    pub const LITHUANIAN: Locale = Locale::from_static("lt");
    pub const NORWEGIAN: Locale = Locale::from_static("no");
    pub const POLISH: Locale = Locale::from_static("pl");
    pub const PORTUGUESE_BR: Locale = Locale::from_static("pt-BR");
    pub const ROMANIAN: Locale = Locale::from_static("ro");
    pub const RUSSIAN: Locale = Locale::from_static("ru");
    pub const SPANISH_ES: Locale = Locale::from_static("es-ES");
    pub const SWEDISH: Locale = Locale::from_static("sv-SE");
    pub const THAI: Locale = Locale::from_static("th");
    pub const TURKISH: Locale = Locale::from_static("tr");
    pub const UKRAINIAN: Locale = Locale::from_static("uk");
    pub const VIETNAMESE: Locale = Locale::from_static("vi");

    /// Wrap a tag known at compile time
    pub const fn from_static(tag: &'static str) -> Self {
        Locale(Cow::Borrowed(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ENGLISH_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale(Cow::Owned(tag.to_string()))
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale(Cow::Owned(tag))
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.into_owned()
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}
