//! Presentation formatting helpers.
//!
//! # Responsibility
//! - Render dates in the site's fixed `es-ES` locale.
//! - Join conditional class names for the component layer.
//!
//! # Invariants
//! - Every helper is pure and never fails; bad input degrades to a marker
//!   string instead of an error.

pub mod class_names;
pub mod date;

pub use class_names::{cn, ClassValue};
pub use date::{
    format_calendar_date, format_date, format_date_range, parse_calendar_date, INVALID_DATE,
    PRESENT_LABEL, RANGE_SEPARATOR,
};
