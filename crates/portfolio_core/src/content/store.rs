//! Immutable content collections and their lookups.
//!
//! # Invariants
//! - Collection order is source order.
//! - Project slugs are unique (case-sensitive).
//! - Lookups never mutate the store and never perform I/O.

use super::{ContentError, ContentResult};
use crate::model::personal::PersonalInfo;
use crate::model::project::{Project, ProjectCategory, ProjectFilter};
use crate::model::skill::{Skill, SkillCategory, SkillGroup};
use log::{error, info};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const PERSONAL_FILE: &str = "personal.json";

const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");
const BUNDLED_SKILLS: &str = include_str!("../../data/skills.json");
const BUNDLED_PERSONAL: &str = include_str!("../../data/personal.json");

/// Loaded site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    personal: PersonalInfo,
}

impl ContentStore {
    /// Validates and wraps already-deserialized collections.
    ///
    /// # Errors
    /// - `ContentError::Validation` for the first record violating its invariants.
    /// - `ContentError::DuplicateSlug` when two projects share a slug.
    pub fn new(
        projects: Vec<Project>,
        skills: Vec<Skill>,
        personal: PersonalInfo,
    ) -> ContentResult<Self> {
        ensure_valid_projects(&projects)?;
        for skill in &skills {
            skill.validate()?;
        }
        personal.validate()?;

        Ok(Self {
            projects,
            skills,
            personal,
        })
    }

    /// Parses and validates the three content documents.
    pub fn from_json(projects: &str, skills: &str, personal: &str) -> ContentResult<Self> {
        Self::new(
            parse_document(PROJECTS_FILE, projects)?,
            parse_document(SKILLS_FILE, skills)?,
            parse_document(PERSONAL_FILE, personal)?,
        )
    }

    /// Loads the content compiled into this crate.
    pub fn bundled() -> ContentResult<Self> {
        let load = || Self::from_json(BUNDLED_PROJECTS, BUNDLED_SKILLS, BUNDLED_PERSONAL);
        log_load("bundled", load)
    }

    /// Loads `projects.json`, `skills.json` and `personal.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> ContentResult<Self> {
        let dir = dir.as_ref();
        log_load("dir", || {
            let projects = read_file(dir, PROJECTS_FILE)?;
            let skills = read_file(dir, SKILLS_FILE)?;
            let personal = read_file(dir, PERSONAL_FILE)?;
            Self::from_json(&projects, &skills, &personal)
        })
    }

    /// All projects in source order.
    pub fn all_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Exact, case-sensitive slug lookup.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.featured)
            .collect()
    }

    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects_for_filter(ProjectFilter::Category(category))
    }

    pub fn projects_for_filter(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project))
            .collect()
    }

    /// Slugs of every project, for static route generation.
    pub fn project_slugs(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(|project| project.slug.as_str())
            .collect()
    }

    pub fn all_skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect()
    }

    /// Skills grouped in grid display order; empty categories are omitted.
    pub fn skills_grouped(&self) -> Vec<SkillGroup<'_>> {
        SkillCategory::DISPLAY_ORDER
            .iter()
            .map(|&category| SkillGroup {
                category,
                skills: self.skills_by_category(category),
            })
            .filter(|group| !group.skills.is_empty())
            .collect()
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal
    }
}

fn ensure_valid_projects(projects: &[Project]) -> ContentResult<()> {
    let mut slugs = HashSet::with_capacity(projects.len());
    for project in projects {
        project.validate()?;
        if !slugs.insert(project.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(project.slug.clone()));
        }
    }
    Ok(())
}

fn parse_document<T: DeserializeOwned>(file: &'static str, raw: &str) -> ContentResult<T> {
    serde_json::from_str(raw).map_err(|error| ContentError::Parse { file, error })
}

fn read_file(dir: &Path, file: &str) -> ContentResult<String> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|error| ContentError::Io { path, error })
}

fn log_load<F>(source: &str, load: F) -> ContentResult<ContentStore>
where
    F: FnOnce() -> ContentResult<ContentStore>,
{
    let started_at = Instant::now();
    info!("event=content_load module=content status=start source={source}");

    match load() {
        Ok(store) => {
            info!(
                "event=content_load module=content status=ok source={} duration_ms={} projects={} skills={}",
                source,
                started_at.elapsed().as_millis(),
                store.projects.len(),
                store.skills.len()
            );
            Ok(store)
        }
        Err(err) => {
            error!(
                "event=content_load module=content status=error source={} duration_ms={} error={}",
                source,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
