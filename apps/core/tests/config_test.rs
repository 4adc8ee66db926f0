use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use snipdeck_core::config::{self, Config, DEFAULT_HOTKEY};

fn unique_config_path(tag: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos();
    std::env::temp_dir().join(format!("snipdeck-config-{tag}-{unique}.toml"))
}

#[test]
fn accepts_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.hotkey, DEFAULT_HOTKEY);
    assert_eq!(cfg.paste_delay_ms, 100);
    assert!(cfg
        .snippets_path
        .to_string_lossy()
        .to_ascii_lowercase()
        .contains("snipdeck"));
    assert!(cfg
        .settings_path
        .to_string_lossy()
        .to_ascii_lowercase()
        .contains("snipdeck"));
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_invalid_hotkey() {
    let cfg = Config {
        hotkey: "S".to_string(),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn rejects_excessive_paste_delay() {
    let cfg = Config {
        paste_delay_ms: 60_000,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn missing_file_loads_defaults_at_the_requested_path() {
    let path = unique_config_path("missing");

    let cfg = config::load(Some(path.clone())).expect("load should fall back to defaults");

    assert_eq!(cfg.hotkey, DEFAULT_HOTKEY);
    assert_eq!(cfg.config_path, path);
    assert!(!path.exists(), "load must not create the config file");
}

#[test]
fn save_then_load_round_trips() {
    let path = unique_config_path("roundtrip");
    let cfg = Config {
        hotkey: "Ctrl+Shift+V".to_string(),
        paste_delay_ms: 250,
        config_path: path.clone(),
        ..Default::default()
    };
    config::save(&cfg).expect("save should succeed");

    let loaded = config::load(Some(path.clone())).expect("load should succeed");
    assert_eq!(loaded.hotkey, "Ctrl+Shift+V");
    assert_eq!(loaded.paste_delay_ms, 250);

    std::fs::remove_file(&path).expect("temp config file should be removed");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = unique_config_path("malformed");
    std::fs::write(&path, "hotkey = [not toml").expect("fixture write");

    let result = config::load(Some(path.clone()));
    assert!(result.is_err());

    std::fs::remove_file(&path).expect("temp config file should be removed");
}

#[test]
fn partial_file_fills_remaining_fields_from_defaults() {
    let path = unique_config_path("partial");
    std::fs::write(&path, "hotkey = \"Ctrl+Alt+V\"\n").expect("fixture write");

    let cfg = config::load(Some(path.clone())).expect("load should succeed");
    assert_eq!(cfg.hotkey, "Ctrl+Alt+V");
    assert_eq!(cfg.paste_delay_ms, 100);

    std::fs::remove_file(&path).expect("temp config file should be removed");
}
