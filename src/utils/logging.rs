//! Logging configuration and setup
//!
//! This module builds the `tracing` stack used as the diagnostic sink and
//! provides the structured log events emitted by bundle loading and lookups.

use std::path::Path;

use tracing::{debug, error, warn, Dispatch};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::i18n::Locale;
use crate::utils::errors::{I18nError, Result};

type FilteredRegistry = Layered<EnvFilter, Registry>;

/// A built diagnostic sink
///
/// Keep the handle alive as long as the dispatch is in use: dropping it
/// flushes and stops the background file writer.
pub struct LogHandle {
    pub dispatch: Dispatch,
    _guard: Option<WorkerGuard>,
}

/// Build a dispatch from configuration, without installing it globally
pub fn build_dispatch(config: &LoggingConfig) -> Result<LogHandle> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Logging(format!("invalid filter '{}': {}", config.level, e)))?;

    let mut layers: Vec<Box<dyn Layer<FilteredRegistry> + Send + Sync>> = Vec::new();
    layers.push(if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    });

    let mut guard = None;
    if let Some(file_path) = &config.file_path {
        let path = Path::new(file_path);
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| I18nError::Logging(format!("log file path has no file name: {}", file_path)))?;
        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        layers.push(if config.json {
            fmt::layer().json().with_ansi(false).with_writer(non_blocking).boxed()
        } else {
            fmt::layer().with_ansi(false).with_writer(non_blocking).boxed()
        });
        guard = Some(worker_guard);
    }

    let subscriber = tracing_subscriber::registry().with(filter).with(layers);

    Ok(LogHandle {
        dispatch: Dispatch::new(subscriber),
        _guard: guard,
    })
}

/// Initialize process-wide logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<LogHandle> {
    let handle = build_dispatch(config)?;
    tracing::dispatcher::set_global_default(handle.dispatch.clone())
        .map_err(|e| I18nError::Logging(e.to_string()))?;

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(handle)
}

/// Log a successfully mapped bundle
pub fn log_bundle_loaded(locale: &Locale, path: &Path, keys: usize, shared: bool) {
    if shared {
        debug!(
            locale = %locale,
            path = %path.display(),
            keys = keys,
            "Bundle loaded (already parsed for other locales)"
        );
    } else {
        debug!(
            locale = %locale,
            path = %path.display(),
            keys = keys,
            "Bundle loaded"
        );
    }
}

/// Log a bundle that could not be read or decoded
pub fn log_bundle_failed(locale: &Locale, path: &Path, err: &I18nError) {
    error!(
        locale = %locale,
        path = %path.display(),
        error = %err,
        "Failed to load bundle"
    );
}

/// Log a lookup that falls back to the default locale or to the key itself
pub fn log_fallback(locale: &Locale, key: &str, reason: &str, fallback: Option<&Locale>) {
    match fallback {
        Some(default_locale) => warn!(
            locale = %locale,
            key = key,
            fallback = %default_locale,
            "{}, trying default locale",
            reason
        ),
        None => warn!(
            locale = %locale,
            key = key,
            "{}, key returned",
            reason
        ),
    }
}

/// Log an interpolation failure
pub fn log_render_failure(locale: &Locale, key: &str, err: &dyn std::error::Error) {
    error!(
        locale = %locale,
        key = key,
        error = %err,
        "Cannot inject variables, raw translation returned"
    );
}
