use snipdeck_core::filter::{filter, FilterOptions};
use snipdeck_core::launcher_state::{HotkeyAction, LauncherState, SearchMemory};

#[test]
fn hotkey_toggle_cycle() {
    let mut state = LauncherState::default();

    assert_eq!(state.on_hotkey(false), HotkeyAction::ShowAndFocus);
    assert!(state.is_visible());

    assert_eq!(state.on_hotkey(false), HotkeyAction::FocusExisting);
    assert!(state.is_visible());

    assert_eq!(state.on_hotkey(true), HotkeyAction::Hide);
    assert!(!state.is_visible());
}

#[test]
fn escape_is_inert_while_hidden() {
    let mut state = LauncherState::default();
    assert!(!state.on_escape());
    state.on_hotkey(false);
    assert!(state.on_escape());
    assert!(!state.on_escape());
}

#[test]
fn hide_then_show_with_keep_search_off_clears_query_and_repopulates() {
    let snippets: Vec<String> = ["red", "blue", "red car"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let options = FilterOptions::default();
    let mut state = LauncherState::default();
    let mut memory = SearchMemory::new(false, "");

    state.on_hotkey(false);
    let typed = "red";
    assert_eq!(filter(&snippets, typed, &options).len(), 2);

    // Escape hides; the field is cleared because keep-search is off.
    assert!(state.on_escape());
    memory.remember(typed);
    assert_eq!(memory.text_for_show(), "");

    // Next show starts from an empty query, so the full list is back.
    state.on_hotkey(false);
    let restored = memory.text_for_show();
    assert_eq!(filter(&snippets, restored, &options), snippets);
}

#[test]
fn hide_then_show_with_keep_search_on_restores_the_query() {
    let mut state = LauncherState::default();
    let mut memory = SearchMemory::new(true, "");

    state.on_hotkey(false);
    memory.remember("red");
    state.on_escape();

    state.on_hotkey(false);
    assert_eq!(memory.text_for_show(), "red");
}

#[test]
fn memory_seeds_from_persisted_text_only_when_keeping() {
    let kept = SearchMemory::new(true, "persisted");
    assert_eq!(kept.text_for_show(), "persisted");

    let discarded = SearchMemory::new(false, "persisted");
    assert_eq!(discarded.text_for_show(), "");
}
