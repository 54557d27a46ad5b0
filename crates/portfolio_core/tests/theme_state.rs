use portfolio_core::{
    FilePreferenceStore, FixedColorScheme, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    RootClassMarker, Theme, ThemeSource, ThemeState, THEME_STORAGE_KEY,
};
use std::sync::Arc;
use std::thread;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable("storage disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable("storage disabled".to_string()))
    }
}

fn stored(store: &MemoryPreferenceStore) -> Option<String> {
    store.read(THEME_STORAGE_KEY).unwrap()
}

#[test]
fn starts_light_without_preference_and_toggles_persist() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let marker = RootClassMarker::new();
    let state = ThemeState::initialize(store.clone(), &FixedColorScheme(None), marker.clone());

    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.source(), ThemeSource::Default);
    assert!(!marker.is_dark());
    assert_eq!(stored(&store), None);

    assert_eq!(state.toggle(), Theme::Dark);
    assert!(marker.is_dark());
    assert_eq!(marker.class_name(), "dark");
    assert_eq!(stored(&store).as_deref(), Some("dark"));

    assert_eq!(state.toggle(), Theme::Light);
    assert!(!marker.is_dark());
    assert_eq!(stored(&store).as_deref(), Some("light"));
}

#[test]
fn persisted_dark_wins_over_light_environment() {
    let store = MemoryPreferenceStore::with_entry(THEME_STORAGE_KEY, "dark");
    let marker = RootClassMarker::new();
    let state = ThemeState::initialize(store, &FixedColorScheme(Some(false)), marker.clone());

    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.source(), ThemeSource::Persisted);
    assert!(marker.is_dark());
}

#[test]
fn dark_environment_is_used_when_nothing_is_persisted() {
    let state = ThemeState::initialize(
        MemoryPreferenceStore::new(),
        &FixedColorScheme(Some(true)),
        RootClassMarker::new(),
    );
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.source(), ThemeSource::Environment);
    assert!(state.marker().is_dark());
}

#[test]
fn unknown_persisted_value_falls_through_to_environment() {
    let store = MemoryPreferenceStore::with_entry(THEME_STORAGE_KEY, "sepia");
    let state = ThemeState::initialize(
        store,
        &FixedColorScheme(Some(true)),
        RootClassMarker::new(),
    );
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.source(), ThemeSource::Environment);
}

#[test]
fn failing_store_still_resolves_and_toggles() {
    let marker = RootClassMarker::new();
    let state = ThemeState::initialize(BrokenStore, &FixedColorScheme(None), marker.clone());
    assert_eq!(state.theme(), Theme::Light);

    assert_eq!(state.toggle(), Theme::Dark);
    assert!(state.is_dark());
    assert!(marker.is_dark());
}

#[test]
fn file_store_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("portfolio.json");

    let first = ThemeState::initialize(
        FilePreferenceStore::new(&path),
        &FixedColorScheme(None),
        RootClassMarker::new(),
    );
    first.toggle();
    drop(first);

    let second = ThemeState::initialize(
        FilePreferenceStore::new(&path),
        &FixedColorScheme(Some(false)),
        RootClassMarker::new(),
    );
    assert_eq!(second.theme(), Theme::Dark);
    assert_eq!(second.source(), ThemeSource::Persisted);
}

#[test]
fn concurrent_toggles_leave_marker_and_store_consistent() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let marker = RootClassMarker::new();
    let state = Arc::new(ThemeState::initialize(
        store.clone(),
        &FixedColorScheme(None),
        marker.clone(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..25 {
                    state.toggle();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(state.theme(), Theme::Light);
    assert!(!marker.is_dark());
    assert_eq!(stored(&store).as_deref(), Some("light"));
}

#[test]
fn toggle_label_names_the_target_theme() {
    assert_eq!(Theme::Light.toggle_label(), "Activar modo oscuro");
    assert_eq!(Theme::Dark.toggle_label(), "Activar modo claro");
}
