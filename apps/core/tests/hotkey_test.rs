#[test]
fn parses_default_hotkey() {
    let parsed = snipdeck_core::hotkey::parse_hotkey("Ctrl+Alt+S").unwrap();
    assert_eq!(parsed.modifiers, vec!["Ctrl".to_string(), "Alt".to_string()]);
    assert_eq!(parsed.key, "S");
}

#[test]
fn rejects_hotkey_without_modifier() {
    assert!(snipdeck_core::hotkey::parse_hotkey("S").is_err());
}

#[test]
fn validates_and_canonicalizes_hotkey() {
    let canonical = snipdeck_core::hotkey::validate_hotkey(" shift + ctrl + s ").unwrap();
    assert_eq!(canonical, "Ctrl+Shift+S");
}

#[test]
fn validates_space_and_function_keys() {
    assert_eq!(
        snipdeck_core::hotkey::validate_hotkey("ctrl+shift+space").unwrap(),
        "Ctrl+Shift+Space"
    );
    assert_eq!(
        snipdeck_core::hotkey::validate_hotkey("alt+f12").unwrap(),
        "Alt+F12"
    );
    assert!(snipdeck_core::hotkey::validate_hotkey("alt+f25").is_err());
}

#[test]
fn rejects_reserved_hotkey() {
    assert!(snipdeck_core::hotkey::validate_hotkey("Alt+Space").is_err());
}

#[test]
fn rejects_win_modifier_hotkey() {
    assert!(snipdeck_core::hotkey::validate_hotkey("Win+S").is_err());
}
