//! Project gallery lightbox cursor.
//!
//! # Invariants
//! - `current < len` whenever `len > 0`.
//! - `next`/`prev` wrap around; an empty gallery never opens.

use crate::model::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Left,
    Right,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            open: false,
        }
    }

    pub fn for_project(project: &Project) -> Self {
        Self::new(project.gallery().len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Opens on image `index`; out-of-range indices are ignored.
    pub fn open_at(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Thumbnail strip click.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Keys only act while the lightbox is open.
    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.open {
            return;
        }
        match key {
            LightboxKey::Left => self.prev(),
            LightboxKey::Right => self.next(),
            LightboxKey::Escape => self.close(),
        }
    }

    /// `"{current + 1} / {len}"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}
