//! Quick-search command registry and palette.
//!
//! # Responsibility
//! - Build the flat list of navigation, project and social commands.
//! - Filter, group and drive keyboard selection over that list.
//!
//! # Invariants
//! - The registry is immutable once built; sessions only hold cursors.

pub mod palette;
pub mod registry;

pub use palette::{CommandPalette, PaletteKey, PaletteOutcome, PaletteSession};
pub use registry::{
    flatten_groups, group_commands, Command, CommandAction, CommandGroup, CommandRegistry,
    GROUP_NAVIGATION, GROUP_PROJECTS, GROUP_SOCIAL,
};
