//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use portfolio_core::content::{install, store};
use portfolio_core::{
    core_version, init_logging_from_config, ContentStore, CoreConfig, EnvColorScheme,
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, RootClassMarker, ThemeState,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("portfolio_cli: logging disabled: {err}");
    }

    let content = match load_content(&config) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("portfolio_cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("portfolio_core version={}", core_version());
    println!(
        "content projects={} featured={} skills={}",
        content.all_projects().len(),
        content.featured_projects().len(),
        content.all_skills().len()
    );

    let probe = EnvColorScheme::from_config(&config);
    let theme = match config.prefs_path.as_ref() {
        Some(path) => resolve_theme(FilePreferenceStore::new(path), &probe),
        None => resolve_theme(MemoryPreferenceStore::new(), &probe),
    };
    println!("theme {theme}");
    ExitCode::SUCCESS
}

fn load_content(config: &CoreConfig) -> Result<&'static ContentStore, String> {
    let Some(dir) = config.content_dir.as_ref() else {
        return Ok(store());
    };
    let loaded = ContentStore::load_dir(dir).map_err(|err| err.to_string())?;
    install(loaded).map_err(|err| err.to_string())
}

fn resolve_theme<S: PreferenceStore>(prefs: S, probe: &EnvColorScheme) -> String {
    let state = ThemeState::initialize(prefs, probe, RootClassMarker::new());
    format!("current={} source={:?}", state.theme(), state.source())
}
