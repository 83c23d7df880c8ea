//! Utility modules
//!
//! This module contains common utilities used throughout the crate:
//! error types and logging setup.

pub mod errors;
pub mod logging;

pub use errors::{DecodeError, ErrorSeverity, I18nError, Result};
