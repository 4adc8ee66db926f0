use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_WIDTH: i32 = 400;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Encode(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Encode(error) => write!(f, "encode error: {error}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// User toggles persisted between runs. The file is hand-editable JSON;
/// unknown keys are ignored and missing keys fall back per field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub always_on_top: bool,
    pub save_window_size: bool,
    pub exact_match: bool,
    pub case_sensitive: bool,
    pub keep_search: bool,
    pub regex_mode: bool,
    pub last_search_text: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            always_on_top: true,
            save_window_size: false,
            exact_match: false,
            case_sensitive: false,
            keep_search: false,
            regex_mode: false,
            last_search_text: String::new(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    pub settings: Settings,
}

impl SettingsStore {
    /// Never fails: a missing file yields defaults silently, a malformed
    /// one yields defaults with a logged warning.
    pub fn load(path: &Path) -> Self {
        let settings = match std::fs::read_to_string(path) {
            Ok(raw) => match json5::from_str::<Settings>(&raw) {
                Ok(settings) => settings,
                Err(error) => {
                    crate::logging::warn(&format!(
                        "settings file {} is malformed ({error}); using defaults",
                        path.display()
                    ));
                    Settings::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(error) => {
                crate::logging::warn(&format!(
                    "settings file {} is unreadable ({error}); using defaults",
                    path.display()
                ));
                Settings::default()
            }
        };

        Self {
            path: path.to_path_buf(),
            settings,
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(&self.settings)
            .map_err(|error| SettingsError::Encode(error.to_string()))?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
