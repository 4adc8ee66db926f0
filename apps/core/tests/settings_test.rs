use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use snipdeck_core::settings::{
    Settings, SettingsStore, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

fn unique_settings_path(tag: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos();
    std::env::temp_dir().join(format!("snipdeck-settings-{tag}-{unique}.json"))
}

#[test]
fn missing_file_loads_defaults() {
    let path = unique_settings_path("missing");

    let store = SettingsStore::load(&path);

    assert_eq!(store.settings, Settings::default());
    assert!(store.settings.always_on_top);
    assert!(!store.settings.keep_search);
    assert_eq!(store.settings.window_width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(store.settings.window_height, DEFAULT_WINDOW_HEIGHT);
    assert!(!path.exists(), "load must not create the settings file");
}

#[test]
fn save_writes_the_documented_kebab_case_keys() {
    let path = unique_settings_path("keys");
    let store = SettingsStore::load(&path);
    store.save().expect("save should succeed");

    let raw = std::fs::read_to_string(&path).expect("settings file should exist");
    for key in [
        "always-on-top",
        "save-window-size",
        "exact-match",
        "case-sensitive",
        "keep-search",
        "regex-mode",
        "last-search-text",
        "window-width",
        "window-height",
    ] {
        assert!(raw.contains(key), "missing key '{key}' in {raw}");
    }

    std::fs::remove_file(&path).expect("temp settings file should be removed");
}

#[test]
fn toggles_and_geometry_round_trip() {
    let path = unique_settings_path("roundtrip");
    let mut store = SettingsStore::load(&path);
    store.settings.exact_match = true;
    store.settings.case_sensitive = true;
    store.settings.keep_search = true;
    store.settings.regex_mode = true;
    store.settings.always_on_top = false;
    store.settings.save_window_size = true;
    store.settings.last_search_text = "red car".to_string();
    store.settings.window_width = 512;
    store.settings.window_height = 384;
    store.save().expect("save should succeed");

    let reloaded = SettingsStore::load(&path);
    assert_eq!(reloaded.settings, store.settings);

    std::fs::remove_file(&path).expect("temp settings file should be removed");
}

#[test]
fn unknown_and_missing_keys_default_safely() {
    let path = unique_settings_path("partial");
    std::fs::write(
        &path,
        r#"{ "keep-search": true, "window-width": 640, "brand-new-key": "ignored" }"#,
    )
    .expect("fixture write");

    let store = SettingsStore::load(&path);
    assert!(store.settings.keep_search);
    assert_eq!(store.settings.window_width, 640);
    assert!(store.settings.always_on_top, "missing key must default");
    assert!(!store.settings.exact_match);

    std::fs::remove_file(&path).expect("temp settings file should be removed");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let path = unique_settings_path("malformed");
    std::fs::write(&path, "{ this is not json").expect("fixture write");

    let store = SettingsStore::load(&path);
    assert_eq!(store.settings, Settings::default());

    std::fs::remove_file(&path).expect("temp settings file should be removed");
}

#[test]
fn hand_edited_file_with_comment_still_loads() {
    let path = unique_settings_path("json5");
    std::fs::write(&path, "{\n  // written by hand\n  \"regex-mode\": true,\n}\n")
        .expect("fixture write");

    let store = SettingsStore::load(&path);
    assert!(store.settings.regex_mode);

    std::fs::remove_file(&path).expect("temp settings file should be removed");
}
