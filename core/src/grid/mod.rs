//! The in-memory container grid and its edit-mode state machine.
//!
//! `Grid` is what a frontend renders: every persisted container plus the
//! trailing add marker. All mutation goes through methods here so the
//! persistence and validation logic stays decoupled from any UI notification
//! mechanism.

use crate::icons::IconCache;
use crate::launcher::{self, LaunchOutcome};
use crate::types::{Container, Entry, PersistedState, WindowBounds};
use crate::validator::{self, RemovedEntry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What an entry activation did, given the edit-mode state machine.
#[derive(Debug, PartialEq)]
pub enum Activation {
    /// Normal mode: the caller should launch the container (or did).
    Launch,
    /// Edit mode: the entry was removed instead.
    Removed(Entry),
}

pub struct Grid {
    containers: Vec<Container>,
    window_bounds: Option<WindowBounds>,
}

impl Grid {
    /// Builds the grid from loaded state, appending the add marker.
    pub fn from_state(state: PersistedState) -> Self {
        let mut containers = state.containers;
        containers.push(Container::add_marker());
        Self {
            containers,
            window_bounds: state.window_bounds,
        }
    }

    /// Everything worth persisting: all containers minus the marker, plus
    /// window bounds. Edit-mode flags are transient and not represented.
    pub fn to_state(&self) -> PersistedState {
        PersistedState {
            containers: self
                .containers
                .iter()
                .filter(|c| !c.is_add_marker())
                .cloned()
                .collect(),
            window_bounds: self.window_bounds,
        }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn window_bounds(&self) -> Option<WindowBounds> {
        self.window_bounds
    }

    pub fn set_window_bounds(&mut self, bounds: Option<WindowBounds>) {
        self.window_bounds = bounds;
    }

    /// Index of the first non-marker container with this name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| !c.is_add_marker() && c.name == name)
    }
}

/// Container and entry mutation.
impl Grid {
    /// Inserts a new empty container before the add marker, named
    /// `Container {n}` where n counts the current tiles (marker included).
    pub fn add_container(&mut self) -> usize {
        let name = format!("Container {}", self.containers.len());
        self.add_named_container(name)
    }

    pub fn add_named_container(&mut self, name: impl Into<String>) -> usize {
        let index = self.marker_index();
        self.containers.insert(index, Container::named(name));
        index
    }

    /// Creates entries for dropped file paths: display name from the file
    /// stem, icon extracted best-effort. Paths already present in the
    /// container (case-insensitive) are skipped. Returns how many entries
    /// were added.
    pub fn add_entries(&mut self, container: usize, paths: &[PathBuf], icons: &IconCache) -> usize {
        let mut added = 0;
        for path in paths {
            let Some(target) = self.containers.get(container) else {
                break;
            };
            if target.is_add_marker() {
                break;
            }
            if target.contains_path(path) {
                debug!(path = %path.display(), "duplicate path, not adding");
                continue;
            }

            let mut entry = Entry::new(display_name_for(path), path.clone());
            entry.icon_path = icons.extract(path);
            entry.edit_mode = target.edit_mode;

            self.containers[container].entries.push(entry);
            added += 1;
        }
        added
    }

    /// Removes one entry and deletes its cached icon best-effort.
    pub fn remove_entry(&mut self, container: usize, entry: usize) -> Option<Entry> {
        let target = self.containers.get_mut(container)?;
        if target.is_add_marker() || entry >= target.entries.len() {
            return None;
        }
        let entry = target.entries.remove(entry);
        if let Some(icon) = &entry.icon_path {
            IconCache::remove(icon);
        }
        Some(entry)
    }

    /// Prunes entries whose target files no longer exist.
    pub fn validate(&mut self) -> Vec<RemovedEntry> {
        validator::validate(&mut self.containers)
    }
}

/// Edit-mode state machine. Every container starts in normal mode; at most
/// one container is in edit mode at a time.
impl Grid {
    /// Puts exactly this container into edit mode, forcing all others back to
    /// normal. The add marker never enters edit mode. Returns false if the
    /// index does not name an editable container.
    pub fn enter_edit_mode(&mut self, container: usize) -> bool {
        match self.containers.get(container) {
            Some(c) if !c.is_add_marker() => {}
            _ => return false,
        }
        for (i, c) in self.containers.iter_mut().enumerate() {
            c.set_edit_mode(i == container);
        }
        true
    }

    /// Returns every container to normal mode. A true result means something
    /// actually left edit mode and the caller should persist state.
    pub fn leave_edit_mode(&mut self) -> bool {
        let was_editing = self.containers.iter().any(|c| c.edit_mode);
        for c in &mut self.containers {
            c.set_edit_mode(false);
        }
        was_editing
    }

    /// The container currently in edit mode, if any.
    pub fn editing(&self) -> Option<usize> {
        self.containers.iter().position(|c| c.edit_mode)
    }

    /// An entry activation deletes the entry when its container is in edit
    /// mode, and otherwise asks the caller to launch.
    pub fn activate_entry(&mut self, container: usize, entry: usize) -> Option<Activation> {
        let target = self.containers.get(container)?;
        if target.is_add_marker() {
            return None;
        }
        if target.edit_mode {
            self.remove_entry(container, entry).map(Activation::Removed)
        } else {
            Some(Activation::Launch)
        }
    }

    /// Launches every entry of the container, unless it is in edit mode.
    pub fn launch(&self, container: usize) -> LaunchOutcome {
        match self.containers.get(container) {
            Some(c) => launcher::launch(c),
            None => LaunchOutcome::default(),
        }
    }

    fn marker_index(&self) -> usize {
        self.containers
            .iter()
            .position(|c| c.is_add_marker())
            .unwrap_or(self.containers.len())
    }
}

fn display_name_for(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests;
