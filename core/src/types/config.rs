use std::path::PathBuf;

pub const SAVE_FILE_NAME: &str = "data.json";
pub const ICONS_DIR_NAME: &str = "Icons";

/// Explicitly constructed path configuration.
///
/// Frontends build one at startup (tests inject a temp directory) instead of
/// relying on process-global paths.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for the save file and the icon cache.
    pub data_dir: PathBuf,
    /// Whether [`clear`](crate::store::Store::clear) also removes the icon
    /// cache directory.
    pub clear_icons: bool,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            clear_icons: true,
        }
    }

    /// Per-user location under the platform's local app-data directory.
    pub fn from_user_dirs() -> Option<Self> {
        dirs::data_local_dir().map(|dir| Self::new(dir.join("LaunchGrid")))
    }

    pub fn save_file_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.data_dir.join(ICONS_DIR_NAME)
    }
}
