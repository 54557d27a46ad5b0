//! Skill domain model.
//!
//! # Invariants
//! - `level` lies within `MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL`.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Cloud,
    Ai,
}

impl SkillCategory {
    /// Order in which the skills grid renders categories.
    pub const DISPLAY_ORDER: [SkillCategory; 6] = [
        Self::Backend,
        Self::Frontend,
        Self::Database,
        Self::Devops,
        Self::Cloud,
        Self::Ai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Cloud => "cloud",
            Self::Ai => "ai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Base de Datos",
            Self::Devops => "DevOps",
            Self::Cloud => "Cloud",
            Self::Ai => "IA & Herramientas",
        }
    }
}

/// Self-assessed proficiency, 1 (starting out) to 5 (expert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
}

impl Skill {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("skill", "name", &self.name)?;
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&self.level) {
            return Err(ValidationError::SkillLevelOutOfRange {
                skill: self.name.clone(),
                level: self.level,
            });
        }
        Ok(())
    }

    /// Level as a percentage of the maximum, for progress bars.
    pub fn percent(&self) -> u8 {
        let level = u16::from(self.level.min(MAX_SKILL_LEVEL));
        (level * 100 / u16::from(MAX_SKILL_LEVEL)) as u8
    }
}

/// Skills of one category, as rendered by the skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<&'a Skill>,
}

#[cfg(test)]
mod tests {
    use super::{Skill, SkillCategory};

    fn skill(level: u8) -> Skill {
        Skill {
            name: "Rust".to_string(),
            category: SkillCategory::Backend,
            level,
        }
    }

    #[test]
    fn percent_scales_level_to_bar_width() {
        assert_eq!(skill(1).percent(), 20);
        assert_eq!(skill(4).percent(), 80);
        assert_eq!(skill(5).percent(), 100);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut blank = skill(3);
        blank.name = "  ".to_string();
        assert!(blank.validate().is_err());
        assert!(skill(3).validate().is_ok());
    }

    #[test]
    fn backend_renders_first() {
        assert_eq!(SkillCategory::DISPLAY_ORDER[0], SkillCategory::Backend);
        assert_eq!(SkillCategory::Ai.label(), "IA & Herramientas");
    }
}
