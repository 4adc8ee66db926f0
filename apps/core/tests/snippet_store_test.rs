use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use snipdeck_core::snippet_store::{SnippetStore, DEFAULT_SNIPPETS};

fn unique_store_path(tag: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos();
    std::env::temp_dir().join(format!("snipdeck-store-{tag}-{unique}.json"))
}

#[test]
fn missing_file_loads_defaults_without_writing_them_back() {
    let path = unique_store_path("missing");

    let store = SnippetStore::load(&path);

    assert_eq!(store.snippets(), &DEFAULT_SNIPPETS.map(String::from));
    assert!(!path.exists(), "load must not create the snippet file");
}

#[test]
fn add_persists_and_is_idempotent() {
    let path = unique_store_path("add");
    let mut store = SnippetStore::load(&path);
    let initial_len = store.len();

    assert!(store.add("git status").expect("add should persist"));
    assert_eq!(store.len(), initial_len + 1);
    assert!(path.exists(), "mutation must persist synchronously");

    assert!(!store.add("git status").expect("duplicate add is a no-op"));
    assert_eq!(store.len(), initial_len + 1);

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn add_rejects_empty_and_whitespace_text() {
    let path = unique_store_path("empty");
    let mut store = SnippetStore::load(&path);
    let initial_len = store.len();

    assert!(!store.add("").expect("empty add is a no-op"));
    assert!(!store.add("   ").expect("whitespace add is a no-op"));
    assert_eq!(store.len(), initial_len);
    assert!(!path.exists(), "no-op mutations must not write");
}

#[test]
fn delete_then_add_appends_at_the_end() {
    let path = unique_store_path("delete-add");
    let mut store = SnippetStore::load(&path);
    let first = store.snippets()[0].clone();

    assert!(store.delete(&first).expect("delete should persist"));
    assert!(store.position_of(&first).is_none());

    assert!(store.add(&first).expect("re-add should persist"));
    assert_eq!(store.position_of(&first), Some(store.len() - 1));

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn delete_of_absent_text_is_a_no_op() {
    let path = unique_store_path("delete-absent");
    let mut store = SnippetStore::load(&path);

    assert!(!store.delete("never stored").expect("absent delete is a no-op"));
    assert!(!path.exists());
}

#[test]
fn edit_replaces_in_place_and_keeps_order() {
    let path = unique_store_path("edit");
    let mut store = SnippetStore::load(&path);

    assert!(store.edit(1, "replacement text").expect("edit should persist"));
    assert_eq!(store.snippets()[1], "replacement text");
    assert_eq!(store.snippets()[0], DEFAULT_SNIPPETS[0]);
    assert_eq!(store.snippets()[2], DEFAULT_SNIPPETS[2]);

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn edit_rejects_duplicates_empties_and_bad_indexes() {
    let path = unique_store_path("edit-reject");
    let mut store = SnippetStore::load(&path);
    let other = store.snippets()[0].clone();

    assert!(!store.edit(1, &other).expect("duplicate edit is a no-op"));
    assert!(!store.edit(1, "  ").expect("empty edit is a no-op"));
    assert!(!store.edit(99, "text").expect("out-of-range edit is a no-op"));
    assert_eq!(store.snippets(), &DEFAULT_SNIPPETS.map(String::from));
    assert!(!path.exists());
}

#[test]
fn mutations_survive_a_reload() {
    let path = unique_store_path("reload");
    let mut store = SnippetStore::load(&path);
    store.add("cargo fmt --all").expect("add should persist");
    store
        .delete(DEFAULT_SNIPPETS[0])
        .expect("delete should persist");

    let reloaded = SnippetStore::load(&path);
    assert_eq!(reloaded.snippets(), store.snippets());

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let path = unique_store_path("malformed");
    std::fs::write(&path, "not a json array at all {{{").expect("fixture write");

    let store = SnippetStore::load(&path);
    assert_eq!(store.snippets(), &DEFAULT_SNIPPETS.map(String::from));

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn hand_edited_file_with_trailing_comma_still_loads() {
    let path = unique_store_path("json5");
    std::fs::write(&path, "[\n  \"one\",\n  \"two\",\n]\n").expect("fixture write");

    let store = SnippetStore::load(&path);
    assert_eq!(store.snippets(), &["one".to_string(), "two".to_string()]);

    std::fs::remove_file(&path).expect("temp store file should be removed");
}

#[test]
fn duplicate_entries_on_disk_are_collapsed_in_order() {
    let path = unique_store_path("dedupe");
    std::fs::write(&path, r#"["a", "b", "a", "", "c"]"#).expect("fixture write");

    let store = SnippetStore::load(&path);
    assert_eq!(
        store.snippets(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );

    std::fs::remove_file(&path).expect("temp store file should be removed");
}
