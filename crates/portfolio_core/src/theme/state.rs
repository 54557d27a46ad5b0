//! Theme state container and its observable root marker.
//!
//! # Invariants
//! - The marker reflects the current theme before `initialize` returns and
//!   after every `toggle`.
//! - `toggle` flips, persists and re-applies the marker under one lock, so no
//!   caller observes a half-applied transition.

use super::scheme::ColorSchemeProbe;
use super::{PreferenceStore, Theme, THEME_STORAGE_KEY};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Class name carried by the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Shared, read-only view of the root `dark` class.
///
/// Clones observe the same flag; only [`ThemeState`] writes it.
#[derive(Debug, Clone, Default)]
pub struct RootClassMarker {
    dark: Arc<AtomicBool>,
}

impl RootClassMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    /// Root class list contribution: `"dark"` or `""`.
    pub fn class_name(&self) -> &'static str {
        if self.is_dark() {
            DARK_CLASS
        } else {
            ""
        }
    }

    fn apply(&self, theme: Theme) {
        self.dark.store(theme.is_dark(), Ordering::SeqCst);
    }
}

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Persisted,
    Environment,
    Default,
}

impl ThemeSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::Environment => "environment",
            Self::Default => "default",
        }
    }
}

/// Process-wide light/dark state with persisted preference.
pub struct ThemeState<S: PreferenceStore> {
    current: Mutex<Theme>,
    source: ThemeSource,
    store: S,
    marker: RootClassMarker,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolves the initial theme and applies it to `marker`.
    ///
    /// Resolution order: persisted value, environment preference, light.
    /// Read failures and unrecognized values fall through to the next step.
    pub fn initialize(store: S, probe: &dyn ColorSchemeProbe, marker: RootClassMarker) -> Self {
        let (theme, source) = resolve_initial(&store, probe);
        marker.apply(theme);
        info!(
            "event=theme_init module=theme status=ok theme={} source={}",
            theme,
            source.as_str()
        );
        Self {
            current: Mutex::new(theme),
            source,
            store,
            marker,
        }
    }

    pub fn theme(&self) -> Theme {
        *self.lock()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn marker(&self) -> &RootClassMarker {
        &self.marker
    }

    /// Flips the theme, persists it and re-applies the root marker.
    ///
    /// A failed write is logged; the in-memory theme still flips.
    pub fn toggle(&self) -> Theme {
        let mut current = self.lock();
        let next = current.toggled();
        *current = next;

        if let Err(err) = self.store.write(THEME_STORAGE_KEY, next.as_str()) {
            warn!(
                "event=theme_persist module=theme status=error theme={} error={}",
                next, err
            );
        }
        self.marker.apply(next);
        info!("event=theme_toggle module=theme status=ok theme={next}");
        next
    }

    fn lock(&self) -> MutexGuard<'_, Theme> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn resolve_initial<S: PreferenceStore>(
    store: &S,
    probe: &dyn ColorSchemeProbe,
) -> (Theme, ThemeSource) {
    match store.read(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => match raw.parse::<Theme>() {
            Ok(theme) => return (theme, ThemeSource::Persisted),
            Err(err) => {
                warn!("event=theme_init module=theme status=fallback step=persisted error={err}")
            }
        },
        Ok(None) => {}
        Err(err) => {
            warn!("event=theme_init module=theme status=fallback step=persisted error={err}")
        }
    }

    match probe.prefers_dark() {
        Ok(true) => (Theme::Dark, ThemeSource::Environment),
        Ok(false) => (Theme::Light, ThemeSource::Environment),
        Err(err) => {
            debug!("event=theme_init module=theme status=fallback step=environment error={err}");
            (Theme::Light, ThemeSource::Default)
        }
    }
}
