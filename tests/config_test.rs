//! Building translators from settings

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use locale_bundles::config::{BundleSource, I18nConfig, Settings};
use locale_bundles::i18n::{BundleTranslator, Locale, Translator};
use locale_bundles::utils::logging;
use locale_bundles::I18nError;
use serial_test::serial;

fn source(locale: Locale, path: std::path::PathBuf) -> BundleSource {
    BundleSource { locale, path }
}

#[test]
fn test_from_config_loads_every_bundle() {
    let fixtures = Fixtures::new();
    let english = fixtures.english();
    let config = I18nConfig {
        default_locale: Locale::ENGLISH_US,
        bundles: vec![
            source(Locale::ENGLISH_US, english.clone()),
            source(Locale::ENGLISH_GB, english),
            source(Locale::FRENCH, fixtures.french()),
        ],
        seed: Some(9),
    };

    let translator = BundleTranslator::from_config(&config).unwrap();
    assert_eq!(translator.loaded_sources(), 2);
    assert_eq!(translator.get_localizations("greet", None).len(), 3);
    assert_eq!(translator.get(&Locale::GERMAN, "greet", None), "Hi");
}

#[test]
fn test_from_config_skips_broken_secondary_bundle() {
    let fixtures = Fixtures::new();
    let config = I18nConfig {
        default_locale: Locale::ENGLISH_US,
        bundles: vec![
            source(Locale::ENGLISH_US, fixtures.english()),
            source(Locale::FRENCH, fixtures.write("fr.json", "{not json")),
            source(Locale::GERMAN, fixtures.path("missing.json")),
        ],
        seed: None,
    };

    let translator = BundleTranslator::from_config(&config).unwrap();
    let locales: Vec<&Locale> = translator.locales().collect();
    assert_eq!(locales, vec![&Locale::ENGLISH_US]);
    assert_eq!(translator.get(&Locale::FRENCH, "greet", None), "Hi");
}

#[test]
fn test_from_config_fails_on_broken_default_bundle() {
    let fixtures = Fixtures::new();
    let config = I18nConfig {
        default_locale: Locale::FRENCH,
        bundles: vec![
            source(Locale::ENGLISH_US, fixtures.english()),
            source(Locale::FRENCH, fixtures.path("missing.json")),
        ],
        seed: None,
    };

    assert_matches!(BundleTranslator::from_config(&config), Err(I18nError::Read { .. }));
}

#[test]
fn test_from_config_rejects_locale_configured_twice() {
    let fixtures = Fixtures::new();
    let config = I18nConfig {
        default_locale: Locale::ENGLISH_US,
        bundles: vec![
            source(Locale::ENGLISH_US, fixtures.english()),
            source(Locale::FRENCH, fixtures.french()),
            source(Locale::FRENCH, fixtures.english()),
        ],
        seed: None,
    };

    assert_matches!(BundleTranslator::from_config(&config), Err(I18nError::Config(_)));

    let mut translator = BundleTranslator::new().with_default(Locale::GERMAN);
    assert_matches!(translator.load_config(&config), Err(I18nError::Config(_)));
    assert_eq!(translator.default_locale(), &Locale::GERMAN);
    assert_eq!(translator.loaded_sources(), 0);
}

#[test]
fn test_settings_from_toml_drive_translator() -> anyhow::Result<()> {
    let fixtures = Fixtures::new();
    let english = fixtures.english();
    let french = fixtures.french();
    let document = format!(
        r#"
        [i18n]
        default_locale = "fr"

        [[i18n.bundles]]
        locale = "fr"
        path = "{}"

        [[i18n.bundles]]
        locale = "en-US"
        path = "{}"

        [logging]
        level = "locale_bundles=debug,warn"
        "#,
        french.display().to_string().replace('\\', "/"),
        english.display().to_string().replace('\\', "/"),
    );

    let settings = Settings::from_toml_str(&document)?;
    settings.validate()?;

    let handle = logging::build_dispatch(&settings.logging)?;
    let mut translator = BundleTranslator::new()
        .with_dispatch(handle.dispatch.clone())
        .with_seed(3);
    translator.load_config(&settings.i18n)?;

    assert_eq!(translator.default_locale(), &Locale::FRENCH);
    assert_eq!(translator.get(&Locale::GERMAN, "greet", None), "Salut");
    assert_eq!(translator.stats().total_keys, 3);
    Ok(())
}

#[test]
#[serial]
fn test_settings_from_environment() {
    std::env::set_var("LOCALE_BUNDLES_I18N__DEFAULT_LOCALE", "ja");
    std::env::set_var("LOCALE_BUNDLES_LOGGING__LEVEL", "warn");

    let settings = Settings::new();

    std::env::remove_var("LOCALE_BUNDLES_I18N__DEFAULT_LOCALE");
    std::env::remove_var("LOCALE_BUNDLES_LOGGING__LEVEL");

    let settings = settings.unwrap();
    assert_eq!(settings.i18n.default_locale, Locale::JAPANESE);
    assert_eq!(settings.logging.level, "warn");
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_settings_without_sources_use_defaults() {
    let settings = Settings::new().unwrap();
    assert_eq!(settings.i18n.default_locale, Locale::ENGLISH_US);
    assert!(settings.i18n.bundles.is_empty());
}
