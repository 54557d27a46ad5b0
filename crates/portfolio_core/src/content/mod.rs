//! Content store bootstrap.
//!
//! # Responsibility
//! - Parse and validate the bundled project, skill and profile collections.
//! - Hold one immutable store per process for the query layer.
//!
//! # Invariants
//! - A store is either fully loaded and valid or not constructed at all.
//! - The process-wide store is set once and never replaced.
//! - Invalid bundled content is fatal at first access.

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod global;
pub mod store;

pub use global::{install, is_installed, store};
pub use store::ContentStore;

pub type ContentResult<T> = Result<T, ContentError>;

/// Content load failure.
#[derive(Debug)]
pub enum ContentError {
    /// Content file could not be read.
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Content does not match the JSON schema (including unknown fields).
    Parse {
        file: &'static str,
        error: serde_json::Error,
    },
    /// A record violates its own invariants.
    Validation(ValidationError),
    /// Two projects share one slug.
    DuplicateSlug(String),
    /// The process-wide store was already set.
    AlreadyInstalled,
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => write!(f, "cannot read `{}`: {error}", path.display()),
            Self::Parse { file, error } => write!(f, "invalid content in `{file}`: {error}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateSlug(slug) => write!(f, "duplicate project slug: `{slug}`"),
            Self::AlreadyInstalled => write!(f, "content store is already installed"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Parse { error, .. } => Some(error),
            Self::Validation(err) => Some(err),
            Self::DuplicateSlug(_) | Self::AlreadyInstalled => None,
        }
    }
}

impl From<ValidationError> for ContentError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
