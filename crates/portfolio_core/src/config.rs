//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve logging, content and preference settings in one place.
//! - Keep lookups injectable so tests never touch the process environment.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - An unsupported log level falls back to the build-mode default.

use crate::logging::default_log_level;
use log::LevelFilter;
use std::path::PathBuf;

/// Log level override (`off|error|warn|info|debug|trace`, any case).
pub const ENV_LOG_LEVEL: &str = "PORTFOLIO_LOG_LEVEL";
/// Absolute directory for rolling log files.
pub const ENV_LOG_DIR: &str = "PORTFOLIO_LOG_DIR";
/// Directory holding `projects.json`, `skills.json` and `personal.json`.
pub const ENV_CONTENT_DIR: &str = "PORTFOLIO_CONTENT_DIR";
/// JSON file backing persisted UI preferences.
pub const ENV_PREFS_PATH: &str = "PORTFOLIO_PREFS_PATH";
/// Environment color-scheme preference (`dark|light`).
pub const ENV_COLOR_SCHEME: &str = "PORTFOLIO_COLOR_SCHEME";

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: LevelFilter,
    /// Logging stays disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// Bundled content is used when `None`.
    pub content_dir: Option<PathBuf>,
    /// Preferences live in memory only when `None`.
    pub prefs_path: Option<PathBuf>,
    pub color_scheme: Option<String>,
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through a caller-provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_level = read(ENV_LOG_LEVEL)
            .and_then(|value| value.parse::<LevelFilter>().ok())
            .unwrap_or_else(default_log_level);

        Self {
            log_level,
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            content_dir: read(ENV_CONTENT_DIR).map(PathBuf::from),
            prefs_path: read(ENV_PREFS_PATH).map(PathBuf::from),
            color_scheme: read(ENV_COLOR_SCHEME),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
