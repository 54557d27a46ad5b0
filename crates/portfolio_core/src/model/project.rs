//! Project domain model.
//!
//! # Responsibility
//! - Define the project record rendered by listing, detail and palette views.
//! - Describe the optional case-study process attached to a project.
//!
//! # Invariants
//! - `slug` is non-empty; uniqueness is enforced by the content store.
//! - `tags` and `highlights` are never empty.
//! - `date.end`, when set, is not earlier than `date.start`.

use super::{require_text, ValidationError};
use crate::format::date::parse_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed three-tier project classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    /// Principal, highest-impact work.
    P1,
    /// Standard academic or professional project.
    P2,
    /// Practice exercise.
    P3,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [Self::P1, Self::P2, Self::P3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }

    /// Badge label shown on a single project.
    pub fn label(self) -> &'static str {
        match self {
            Self::P1 => "Principal",
            Self::P2 => "Proyecto",
            Self::P3 => "Práctica",
        }
    }

    /// Plural label used by the listing filter tabs.
    pub fn filter_label(self) -> &'static str {
        match self {
            Self::P1 => "Principales",
            Self::P2 => "Proyectos",
            Self::P3 => "Prácticas",
        }
    }
}

/// Listing filter: every project, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Category(category) => category.filter_label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectImages {
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

/// ISO calendar dates; `end = None` means the project is ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDate {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub tools: Vec<String>,
}

impl TechStack {
    /// Iterates frontend, backend and tool entries in that order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frontend
            .iter()
            .chain(&self.backend)
            .chain(&self.tools)
            .map(String::as_str)
    }
}

/// Case-study phase identifier, in narrative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessPhase {
    Problema,
    Analisis,
    Desarrollo,
    Despliegue,
    Seguridad,
}

impl ProcessPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Problema => "Problema Identificado",
            Self::Analisis => "Análisis y Diseño",
            Self::Desarrollo => "Desarrollo",
            Self::Despliegue => "Despliegue",
            Self::Seguridad => "Seguridad Aplicada",
        }
    }

    /// 1-based position of the phase in the case-study timeline.
    pub fn step(self) -> u8 {
        match self {
            Self::Problema => 1,
            Self::Analisis => 2,
            Self::Desarrollo => 3,
            Self::Despliegue => 4,
            Self::Seguridad => 5,
        }
    }
}

/// One phase of a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    #[serde(rename = "id")]
    pub phase: ProcessPhase,
    #[serde(rename = "resumen")]
    pub summary: String,
    #[serde(rename = "puntos")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessMetric {
    pub label: String,
    pub value: String,
}

/// Case-study narrative attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectProcess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(rename = "pasos")]
    pub steps: Vec<ProcessStep>,
    #[serde(rename = "resultado", default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(rename = "metricas", default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<ProcessMetric>>,
}

/// Portfolio project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    /// Case-sensitive lookup key used in `/projects/{slug}` routes.
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub category: ProjectCategory,
    pub tags: Vec<String>,
    pub images: ProjectImages,
    pub links: ProjectLinks,
    pub featured: bool,
    pub date: ProjectDate,
    pub tech_stack: TechStack,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<ProjectProcess>,
}

impl Project {
    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = format!("project `{}`", self.slug);
        require_text(&record, "slug", &self.slug)?;
        require_text(&record, "id", &self.id)?;
        require_text(&record, "title", &self.title)?;
        require_text(&record, "images.thumbnail", &self.images.thumbnail)?;

        if self.tags.is_empty() {
            return Err(ValidationError::MissingTags(self.slug.clone()));
        }
        if self.highlights.is_empty() {
            return Err(ValidationError::MissingHighlights(self.slug.clone()));
        }

        let start = parse_date(&record, &self.date.start)?;
        if let Some(end_raw) = self.end_date() {
            let end = parse_date(&record, end_raw)?;
            if end < start {
                return Err(ValidationError::InvalidDateWindow {
                    record,
                    start: self.date.start.clone(),
                    end: end_raw.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Gallery images, empty when the project has none.
    pub fn gallery(&self) -> &[String] {
        self.images.gallery.as_deref().unwrap_or_default()
    }

    /// Whether the project has no end date.
    pub fn is_ongoing(&self) -> bool {
        self.end_date().is_none()
    }

    /// Route path of the project detail page.
    pub fn route(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    /// `date.end`, with a blank value treated as absent.
    fn end_date(&self) -> Option<&str> {
        self.date.end.as_deref().filter(|end| !end.trim().is_empty())
    }
}

fn parse_date(record: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    parse_calendar_date(value).ok_or_else(|| ValidationError::InvalidDate {
        record: record.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectCategory, ProjectFilter};
    use crate::model::ValidationError;

    fn project() -> Project {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "slug": "demo",
            "title": "Demo",
            "description": "Demo",
            "category": "P1",
            "tags": ["Rust"],
            "images": { "thumbnail": "/demo.png" },
            "links": {},
            "featured": true,
            "date": { "start": "2025-03-01" },
            "techStack": { "frontend": ["React"], "backend": ["Axum"], "tools": ["Docker"] },
            "highlights": ["Uno"]
        }))
        .unwrap()
    }

    #[test]
    fn ongoing_project_without_gallery_is_valid() {
        let project = project();
        assert!(project.validate().is_ok());
        assert!(project.is_ongoing());
        assert!(project.gallery().is_empty());
        assert_eq!(project.route(), "/projects/demo");
        let stack: Vec<&str> = project.tech_stack.iter().collect();
        assert_eq!(stack, ["React", "Axum", "Docker"]);
    }

    #[test]
    fn blank_end_date_counts_as_ongoing() {
        let mut project = project();
        project.date.end = Some(" ".to_string());
        assert!(project.validate().is_ok());
        assert!(project.is_ongoing());
    }

    #[test]
    fn blank_slug_is_rejected() {
        let mut project = project();
        project.slug = String::new();
        assert!(matches!(
            project.validate(),
            Err(ValidationError::EmptyField { field: "slug", .. })
        ));
    }

    #[test]
    fn filter_labels_and_matching() {
        let project = project();
        assert!(ProjectFilter::All.matches(&project));
        assert!(ProjectFilter::Category(ProjectCategory::P1).matches(&project));
        assert!(!ProjectFilter::Category(ProjectCategory::P3).matches(&project));
        assert_eq!(ProjectFilter::All.label(), "Todos");
        assert_eq!(ProjectCategory::P3.label(), "Práctica");
    }
}
