//! Error handling for locale-bundles
//!
//! This module defines the error types surfaced by the setup phase
//! (bundle loading, configuration, logging). Lookups never fail: render
//! errors live in the template module and are only ever logged.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for locale-bundles
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Failed to read bundle source '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode bundle source '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("A global translator is already installed")]
    AlreadyInstalled,
}

/// Structured-data decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("source is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Result type alias for locale-bundles operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Build a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        I18nError::Read { path: path.into(), source }
    }

    /// Build a decode error for `path`
    pub fn decode(path: impl Into<PathBuf>, source: impl Into<DecodeError>) -> Self {
        I18nError::Decode { path: path.into(), source: source.into() }
    }

    /// Check if retrying the operation may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::Read { .. } => true,
            I18nError::Decode { .. } => false,
            I18nError::Config(_) => false,
            I18nError::Settings(_) => false,
            I18nError::Logging(_) => false,
            I18nError::AlreadyInstalled => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::Config(_) => ErrorSeverity::Critical,
            I18nError::Settings(_) => ErrorSeverity::Critical,
            I18nError::AlreadyInstalled => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
