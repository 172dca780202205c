//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! Every setting has a default, so the program runs with no environment
//! at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default location of the persisted book, relative to the working
/// directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted book file
    pub book_path: PathBuf,

    /// Whether ANSI colors are emitted (default: true; `NO_COLOR`
    /// disables them)
    pub color: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: book file location (default: `addressbook.json`)
    /// - `NO_COLOR`: when set (to anything), disables ANSI colors
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_BOOK_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let color = env::var_os("NO_COLOR").is_none();
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            color,
            log_level,
        })
    }

    /// Build the logging filter.
    ///
    /// `RUST_LOG` wins when set; otherwise the configured `LOG_LEVEL`
    /// applies.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            color: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert!(config.color);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_BOOK_PATH");
        env::remove_var("NO_COLOR");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from(DEFAULT_BOOK_PATH));
        assert!(config.color);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "/tmp/contacts.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path_fails() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_BOOK_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_log_filter_uses_configured_level() {
        env::remove_var("RUST_LOG");

        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_filter().to_string(), "debug");
    }

    #[test]
    #[serial]
    fn test_log_filter_prefers_rust_log() {
        let mut guard = EnvGuard::new();
        guard.set("RUST_LOG", "trace");

        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_filter().to_string(), "trace");
    }

    #[test]
    #[serial]
    fn test_config_no_color() {
        let mut guard = EnvGuard::new();
        guard.set("NO_COLOR", "1");

        let config = Config::from_env().unwrap();
        assert!(!config.color);
    }
}
