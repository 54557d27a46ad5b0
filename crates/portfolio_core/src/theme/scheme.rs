//! Environment color-scheme preference probes.

use super::{PreferenceError, PreferenceResult};
use crate::config::{CoreConfig, ENV_COLOR_SCHEME};

/// Answers "does the environment prefer dark presentation".
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> PreferenceResult<bool>;
}

/// Probe with a fixed answer; `None` behaves like an unavailable environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> PreferenceResult<bool> {
        self.0.ok_or_else(|| {
            PreferenceError::Unavailable("no color-scheme preference reported".to_string())
        })
    }
}

/// Probe reading the `PORTFOLIO_COLOR_SCHEME` setting (`dark|light`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvColorScheme {
    value: Option<String>,
}

impl EnvColorScheme {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.color_scheme.clone())
    }
}

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> PreferenceResult<bool> {
        let Some(value) = self.value.as_deref() else {
            let message = format!("{ENV_COLOR_SCHEME} is not set");
            return Err(PreferenceError::Unavailable(message));
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(true),
            "light" => Ok(false),
            other => {
                let message = format!("{ENV_COLOR_SCHEME} has unsupported value `{other}`");
                Err(PreferenceError::Unavailable(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorSchemeProbe, EnvColorScheme, FixedColorScheme};

    #[test]
    fn env_probe_accepts_case_insensitive_values() {
        let probe = EnvColorScheme::new(Some("DARK".to_string()));
        assert!(probe.prefers_dark().unwrap());
        let probe = EnvColorScheme::new(Some("light".to_string()));
        assert!(!probe.prefers_dark().unwrap());
    }

    #[test]
    fn env_probe_reports_missing_and_unknown_values() {
        assert!(EnvColorScheme::new(None).prefers_dark().is_err());
        let probe = EnvColorScheme::new(Some("auto".to_string()));
        assert!(probe.prefers_dark().is_err());
    }

    #[test]
    fn fixed_probe_without_answer_is_unavailable() {
        assert!(FixedColorScheme(None).prefers_dark().is_err());
        assert!(FixedColorScheme(Some(true)).prefers_dark().unwrap());
    }
}
