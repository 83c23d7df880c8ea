//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;

use tracing_subscriber::EnvFilter;

use super::Settings;
use crate::utils::errors::{I18nError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
pub fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(I18nError::Config("Default locale is required".to_string()));
    }

    let mut seen = HashSet::new();
    for source in &config.bundles {
        if source.locale.is_empty() {
            return Err(I18nError::Config(format!(
                "Bundle '{}' has an empty locale",
                source.path.display()
            )));
        }

        if source.path.as_os_str().is_empty() {
            return Err(I18nError::Config(format!(
                "Bundle path for locale '{}' is empty",
                source.locale
            )));
        }

        if !seen.insert(&source.locale) {
            return Err(I18nError::Config(format!(
                "Locale '{}' is configured more than once",
                source.locale
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config("Log level is required".to_string()));
    }

    // Same parser the subscriber uses, so per-target directives are accepted
    EnvFilter::try_new(&config.level).map_err(|e| {
        I18nError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    Ok(())
}
