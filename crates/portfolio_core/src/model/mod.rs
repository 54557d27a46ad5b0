//! Portfolio content model.
//!
//! # Responsibility
//! - Define the records bundled as site content (projects, skills, profile).
//! - Own per-record invariants through `validate()`.
//!
//! # Invariants
//! - Records are read-only once loaded into a `ContentStore`.
//! - Serialized field names follow the content JSON schema (camelCase).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod personal;
pub mod project;
pub mod skill;

/// Record-level invariant violation found while loading content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is blank.
    EmptyField { record: String, field: &'static str },
    /// Project carries no tags.
    MissingTags(String),
    /// Project carries no highlights.
    MissingHighlights(String),
    /// Date string is not a calendar date.
    InvalidDate { record: String, value: String },
    /// `date.end` is earlier than `date.start`.
    InvalidDateWindow {
        record: String,
        start: String,
        end: String,
    },
    /// Skill level outside `1..=5`.
    SkillLevelOutOfRange { skill: String, level: u8 },
    /// Email does not have a `local@domain.tld` shape.
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { record, field } => {
                write!(f, "{record}: field `{field}` must not be empty")
            }
            Self::MissingTags(slug) => write!(f, "project `{slug}` must have at least one tag"),
            Self::MissingHighlights(slug) => {
                write!(f, "project `{slug}` must have at least one highlight")
            }
            Self::InvalidDate { record, value } => {
                write!(f, "{record}: `{value}` is not a valid date")
            }
            Self::InvalidDateWindow { record, start, end } => write!(
                f,
                "{record}: end date ({end}) must be >= start date ({start})"
            ),
            Self::SkillLevelOutOfRange { skill, level } => {
                write!(f, "skill `{skill}` level {level} is outside 1..=5")
            }
            Self::InvalidEmail(value) => write!(f, "email `{value}` is not a valid address"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    record: &str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            record: record.to_string(),
            field,
        });
    }
    Ok(())
}
