//! Light/dark presentation theme.
//!
//! # Responsibility
//! - Resolve the initial theme from persisted preference, environment and
//!   default, in that order.
//! - Own the only mutable shared state of the core behind one toggle.
//!
//! # Invariants
//! - Exactly two states; `toggle` is the only transition.
//! - Persisted values are the literal strings `light` and `dark` under
//!   `THEME_STORAGE_KEY`.
//! - Preference and probe failures never reach callers.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub mod preference;
pub mod scheme;
pub mod state;

pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use scheme::{ColorSchemeProbe, EnvColorScheme, FixedColorScheme};
pub use state::{RootClassMarker, ThemeSource, ThemeState, DARK_CLASS};

/// Storage key of the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label of the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Activar modo oscuro",
            Self::Dark => "Activar modo claro",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted value is not `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl Display for UnknownTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme `{}`; expected light|dark", self.0)
    }
}

impl Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Failure reading or writing a preference, or querying the environment.
#[derive(Debug)]
pub enum PreferenceError {
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    Parse {
        path: PathBuf,
        error: serde_json::Error,
    },
    /// The source exists but holds no usable answer.
    Unavailable(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => write!(
                f,
                "preference file `{}` is not accessible: {error}",
                path.display()
            ),
            Self::Parse { path, error } => write!(
                f,
                "preference file `{}` is malformed: {error}",
                path.display()
            ),
            Self::Unavailable(message) => write!(f, "preference unavailable: {message}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Parse { error, .. } => Some(error),
            Self::Unavailable(_) => None,
        }
    }
}
