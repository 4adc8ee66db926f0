use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOTKEY: &str = "Ctrl+Alt+S";
pub const DEFAULT_PASTE_DELAY_MS: u64 = 100;

const CONFIG_FILE_NAME: &str = "config.toml";
const SNIPPETS_FILE_NAME: &str = "snippets.json";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub hotkey: String,
    pub paste_delay_ms: u64,
    pub snippets_path: PathBuf,
    pub settings_path: PathBuf,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = stable_app_data_dir();
        Self {
            hotkey: DEFAULT_HOTKEY.to_string(),
            paste_delay_ms: DEFAULT_PASTE_DELAY_MS,
            snippets_path: base.join(SNIPPETS_FILE_NAME),
            settings_path: base.join(SETTINGS_FILE_NAME),
            config_path: base.join(CONFIG_FILE_NAME),
        }
    }
}

/// Per-user directory that survives temp cleanups on Windows; the temp-dir
/// fallback keeps non-Windows builds and tests functional.
pub fn stable_app_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        if let Ok(appdata) = std::env::var("APPDATA") {
            let trimmed = appdata.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed).join("SnipDeck");
            }
        }
    }
    std::env::temp_dir().join("snipdeck")
}

pub fn load(override_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config_path = override_path.unwrap_or_else(|| stable_app_data_dir().join(CONFIG_FILE_NAME));

    let raw = match std::fs::read_to_string(&config_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            let config = Config {
                config_path,
                ..Config::default()
            };
            validate(&config)?;
            return Ok(config);
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let mut config: Config =
        toml::from_str(&raw).map_err(|error| ConfigError::Parse(error.to_string()))?;
    config.config_path = config_path;
    validate(&config)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    validate(config)?;
    if let Some(parent) = config.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let encoded =
        toml::to_string_pretty(config).map_err(|error| ConfigError::Parse(error.to_string()))?;
    std::fs::write(&config.config_path, encoded)?;
    Ok(())
}

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    crate::hotkey::validate_hotkey(&config.hotkey).map_err(ConfigError::Invalid)?;

    if config.paste_delay_ms > 2_000 {
        return Err(ConfigError::Invalid(
            "paste_delay_ms must be 2000 or less".to_string(),
        ));
    }

    if config.snippets_path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "snippets_path is required".to_string(),
        ));
    }

    if config.settings_path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "settings_path is required".to_string(),
        ));
    }

    Ok(())
}
