//! Query entry points over the process-wide content store.
//!
//! # Responsibility
//! - Give page-level callers lookups without threading a store handle.
//!
//! # Invariants
//! - Every function is pure after the first (loading) call.
//! - "Not found" is `None`, never an error.

use crate::content::store;
use crate::model::personal::PersonalInfo;
use crate::model::project::{Project, ProjectCategory, ProjectFilter};
use crate::model::skill::{Skill, SkillCategory, SkillGroup};

pub fn get_all_projects() -> &'static [Project] {
    store().all_projects()
}

/// Returns the project whose slug equals `slug` exactly.
pub fn get_project_by_slug(slug: &str) -> Option<&'static Project> {
    store().project_by_slug(slug)
}

pub fn get_featured_projects() -> Vec<&'static Project> {
    store().featured_projects()
}

pub fn get_projects_by_category(category: ProjectCategory) -> Vec<&'static Project> {
    store().projects_by_category(category)
}

pub fn get_projects_for_filter(filter: ProjectFilter) -> Vec<&'static Project> {
    store().projects_for_filter(filter)
}

pub fn project_slugs() -> Vec<&'static str> {
    store().project_slugs()
}

pub fn get_all_skills() -> &'static [Skill] {
    store().all_skills()
}

pub fn get_skills_by_category(category: SkillCategory) -> Vec<&'static Skill> {
    store().skills_by_category(category)
}

pub fn skills_grouped() -> Vec<SkillGroup<'static>> {
    store().skills_grouped()
}

pub fn get_personal_info() -> &'static PersonalInfo {
    store().personal_info()
}
