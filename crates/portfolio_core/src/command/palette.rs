//! Command palette overlay state.
//!
//! # Responsibility
//! - Track the query and selection cursor of one open overlay.
//! - Translate keyboard input into cursor moves, activation or close.
//!
//! # Invariants
//! - The cursor stays within `[0, len - 1]`, and is `0` for an empty list.
//! - The cursor resets to `0` whenever the query text changes.
//! - A session lives only while the overlay is open; reopening starts fresh.

use super::registry::{flatten_groups, Command, CommandAction, CommandGroup, CommandRegistry};

/// Keys handled while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Result of feeding one key to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// Overlay stays open.
    Continue,
    /// Overlay closes without running anything.
    Close,
    /// Overlay closes and the caller runs the action.
    Activate(CommandAction),
}

/// Selection state of one open overlay.
#[derive(Debug, Clone)]
pub struct PaletteSession<'r> {
    registry: &'r CommandRegistry,
    query: String,
    groups: Vec<CommandGroup<'r>>,
    results: Vec<&'r Command>,
    selected: usize,
}

impl<'r> PaletteSession<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        let groups = registry.search("");
        let results = flatten_groups(&groups);
        Self {
            registry,
            query: String::new(),
            groups,
            results,
            selected: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query; the cursor resets only when the text changed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.groups = self.registry.search(&query);
        self.results = flatten_groups(&self.groups);
        self.query = query;
        self.selected = 0;
    }

    pub fn groups(&self) -> &[CommandGroup<'r>] {
        &self.groups
    }

    /// Filtered commands in display (grouped) order.
    pub fn results(&self) -> &[&'r Command] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_command(&self) -> Option<&'r Command> {
        self.results.get(self.selected).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Placeholder text for a query without matches.
    pub fn empty_message(&self) -> Option<String> {
        self.is_empty()
            .then(|| format!("Sin resultados para \u{201c}{}\u{201d}", self.query))
    }

    /// Pointer hover selects the entry under it.
    pub fn hover(&mut self, index: usize) {
        self.selected = index.min(self.last_index());
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: PaletteKey) -> PaletteOutcome {
        match key {
            PaletteKey::Down => {
                self.move_down();
                PaletteOutcome::Continue
            }
            PaletteKey::Up => {
                self.move_up();
                PaletteOutcome::Continue
            }
            PaletteKey::Enter => match self.selected_command() {
                Some(command) => PaletteOutcome::Activate(command.action.clone()),
                None => PaletteOutcome::Continue,
            },
            PaletteKey::Escape => PaletteOutcome::Close,
        }
    }

    fn last_index(&self) -> usize {
        self.results.len().saturating_sub(1)
    }
}

/// Overlay holder: closed, or open with a fresh session.
#[derive(Debug, Clone)]
pub struct CommandPalette<'r> {
    registry: &'r CommandRegistry,
    session: Option<PaletteSession<'r>>,
}

impl<'r> CommandPalette<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self {
            registry,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens the overlay; an already open session is kept.
    pub fn open(&mut self) -> &mut PaletteSession<'r> {
        let registry = self.registry;
        self.session
            .get_or_insert_with(|| PaletteSession::new(registry))
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    /// Ctrl/Cmd+K behavior.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn session(&self) -> Option<&PaletteSession<'r>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PaletteSession<'r>> {
        self.session.as_mut()
    }

    /// Routes a key to the open session and closes the overlay on
    /// `Close`/`Activate`. Returns `Continue` while closed.
    pub fn handle_key(&mut self, key: PaletteKey) -> PaletteOutcome {
        let Some(session) = self.session.as_mut() else {
            return PaletteOutcome::Continue;
        };
        let outcome = session.handle_key(key);
        if outcome != PaletteOutcome::Continue {
            self.close();
        }
        outcome
    }
}
