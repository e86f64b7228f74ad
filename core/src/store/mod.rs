//! JSON save-file persistence.

use crate::types::{Config, Container, PersistedState};
use error::StoreError;
use std::path::Path;
use tracing::debug;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }
}

pub struct Store {
    config: Config,
}

fn remove_dir_if_empty(path: &Path) -> Result<(), StoreError> {
    if path.exists() && path.read_dir()?.next().is_none() {
        std::fs::remove_dir(path)?;
    }
    Ok(())
}

impl Store {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the persisted state, falling back to a single empty "Default"
    /// container when the save file is missing, unreadable, corrupt or empty.
    /// Never fails; the reason for a fallback is logged.
    pub fn load(&self) -> PersistedState {
        match self.try_load() {
            Ok(state) if !state.containers.is_empty() => state,
            Ok(_) => {
                debug!("save file holds no containers, starting with default");
                PersistedState::default_container()
            }
            Err(e) => {
                debug!(error = %e, "could not load saved state, starting with default");
                PersistedState::default_container()
            }
        }
    }

    fn try_load(&self) -> Result<PersistedState, StoreError> {
        let json = std::fs::read_to_string(self.config.save_file_path())?;

        match serde_json::from_str::<PersistedState>(&json) {
            Ok(state) => Ok(state),
            // Legacy saves are a bare array of containers with no envelope.
            Err(envelope_err) => match serde_json::from_str::<Vec<Container>>(&json) {
                Ok(containers) => Ok(PersistedState {
                    containers,
                    window_bounds: None,
                }),
                Err(_) => Err(envelope_err.into()),
            },
        }
    }

    /// Writes the whole state as indented JSON, overwriting the save file.
    /// The add marker is never persisted.
    pub fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.config.data_dir)?;

        let persistable = PersistedState {
            containers: state
                .containers
                .iter()
                .filter(|c| !c.is_add_marker())
                .cloned()
                .collect(),
            window_bounds: state.window_bounds,
        };

        let json = serde_json::to_string_pretty(&persistable)?;
        std::fs::write(self.config.save_file_path(), json)?;
        Ok(())
    }

    /// Deletes the save file and, when configured, the icon cache directory.
    /// Removes the data directory if that leaves it empty. Missing files are
    /// not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        let save_file = self.config.save_file_path();
        if save_file.exists() {
            std::fs::remove_file(&save_file)?;
        }

        if self.config.clear_icons {
            let icons_dir = self.config.icons_dir();
            if icons_dir.exists() {
                std::fs::remove_dir_all(&icons_dir)?;
            }
        }

        remove_dir_if_empty(&self.config.data_dir)?;
        Ok(())
    }
}
