//! LaunchGrid core: the UI-agnostic half of a desktop launcher.
//!
//! Owns persistence (JSON save file with a legacy-schema fallback), startup
//! validation of stale entries, the on-disk icon cache, process launching and
//! the per-container edit-mode state machine. Frontends render [`Grid`] and
//! feed user gestures back into it.

pub mod grid;
pub mod icons;
pub mod launcher;
pub mod store;
pub mod types;
pub mod validator;

pub use grid::Grid;
pub use icons::IconCache;
pub use store::Store;
pub use types::{Config, Container, Entry, PersistedState, WindowBounds};
