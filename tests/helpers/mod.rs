//! Test helpers module
//!
//! Fixture bundles written to a temporary directory, plus one-time
//! tracing setup for tests that want to see diagnostics.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub const ENGLISH: &str = r#"{
    "greet": "Hi",
    "welcome": "Hello {{.Name}}",
    "variants": ["Hey", "Howdy", "Hello there"],
    "menu": {
        "open": "Open",
        "recent": {
            "title": "Recent files",
            "count": 3
        }
    },
    "english_only": "Only in English"
}"#;

pub const FRENCH: &str = r#"{
    "greet": "Salut",
    "welcome": "Bonjour {{.Name}}",
    "menu": {
        "open": "Ouvrir"
    }
}"#;

/// Temporary directory holding bundle sources
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        init_test_env();
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn english(&self) -> PathBuf {
        self.write("en.json", ENGLISH)
    }

    pub fn french(&self) -> PathBuf {
        self.write("fr.json", FRENCH)
    }
}
