//! Core logic for the portfolio site.
//! This crate is the single source of truth for content invariants.

pub mod command;
pub mod config;
pub mod content;
pub mod format;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod query;
pub mod tech;
pub mod theme;

pub use command::{
    Command, CommandAction, CommandGroup, CommandPalette, CommandRegistry, PaletteKey,
    PaletteOutcome, PaletteSession,
};
pub use config::CoreConfig;
pub use content::{ContentError, ContentResult, ContentStore};
pub use format::{cn, format_date, format_date_range, ClassValue};
pub use gallery::{Lightbox, LightboxKey};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::personal::{ExperienceEntry, PersonalInfo, SocialLinks};
pub use model::project::{ProcessPhase, Project, ProjectCategory, ProjectFilter, ProjectProcess};
pub use model::skill::{Skill, SkillCategory, SkillGroup};
pub use model::ValidationError;
pub use query::{
    get_all_projects, get_all_skills, get_featured_projects, get_personal_info,
    get_project_by_slug, get_projects_by_category, get_projects_for_filter, get_skills_by_category,
    project_slugs, skills_grouped,
};
pub use tech::{tech_icon_url, tech_info, TechInfo};
pub use theme::{
    ColorSchemeProbe, EnvColorScheme, FilePreferenceStore, FixedColorScheme, MemoryPreferenceStore,
    PreferenceError, PreferenceStore, RootClassMarker, Theme, ThemeSource, ThemeState,
    THEME_STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
