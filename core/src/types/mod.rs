//! Domain types shared across the crate.
//!
//! Field renames pin the on-disk JSON to the historical PascalCase schema;
//! aliases accept camelCase and lowercase spellings from older save files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod config;

pub use config::Config;

/// One shortcut to an executable file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "DisplayName", alias = "displayName", alias = "displayname")]
    pub display_name: String,

    #[serde(rename = "FilePath", alias = "filePath", alias = "filepath")]
    pub file_path: PathBuf,

    /// Cached thumbnail on disk, if extraction succeeded when the entry was added.
    #[serde(rename = "IconPath", alias = "iconPath", alias = "iconpath", default)]
    pub icon_path: Option<PathBuf>,

    /// Mirrored from the owning container; never persisted.
    #[serde(skip)]
    pub edit_mode: bool,
}

impl Entry {
    pub fn new(display_name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            file_path: file_path.into(),
            icon_path: None,
            edit_mode: false,
        }
    }

    /// Path equality under the case-insensitive rules of the save format.
    pub fn matches_path(&self, path: &Path) -> bool {
        paths_equal_ignore_case(&self.file_path, path)
    }
}

/// A named group of launcher entries rendered as one grid tile.
///
/// The synthetic add marker (see [`Container::add_marker`]) exists only in
/// memory to render the "new container" affordance and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Apps", alias = "apps", default)]
    pub entries: Vec<Entry>,

    #[serde(skip)]
    pub edit_mode: bool,

    #[serde(skip)]
    add_marker: bool,
}

impl Container {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            edit_mode: false,
            add_marker: false,
        }
    }

    /// The in-memory "add new container" affordance.
    pub fn add_marker() -> Self {
        Self {
            name: String::new(),
            entries: Vec::new(),
            edit_mode: false,
            add_marker: true,
        }
    }

    pub fn is_add_marker(&self) -> bool {
        self.add_marker
    }

    /// Index of the entry whose file path matches `path`, case-insensitive.
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.matches_path(path))
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.position_of(path).is_some()
    }

    /// Flips edit mode, keeping every entry's mirrored flag in sync.
    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
        for entry in &mut self.entries {
            entry.edit_mode = on;
        }
    }
}

/// Last known application window placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    #[serde(rename = "Left", alias = "left")]
    pub left: i32,
    #[serde(rename = "Top", alias = "top")]
    pub top: i32,
    #[serde(rename = "Width", alias = "width")]
    pub width: u32,
    #[serde(rename = "Height", alias = "height")]
    pub height: u32,
}

/// On-disk envelope: everything a session persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(rename = "Containers", alias = "containers", default)]
    pub containers: Vec<Container>,

    #[serde(
        rename = "WindowBounds",
        alias = "windowBounds",
        alias = "windowbounds",
        default
    )]
    pub window_bounds: Option<WindowBounds>,
}

/// Name of the container created when no valid save exists.
pub const DEFAULT_CONTAINER_NAME: &str = "Default";

impl PersistedState {
    /// Fallback state: exactly one empty container, no bounds.
    pub fn default_container() -> Self {
        Self {
            containers: vec![Container::named(DEFAULT_CONTAINER_NAME)],
            window_bounds: None,
        }
    }
}

pub(crate) fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy()
        .eq_ignore_ascii_case(&b.to_string_lossy())
}
