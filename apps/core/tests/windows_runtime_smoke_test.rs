use std::time::{SystemTime, UNIX_EPOCH};

use snipdeck_core::filter::{filter, FilterOptions};
use snipdeck_core::hotkey_runtime::{default_hotkey_registrar, HotkeyRegistration};
use snipdeck_core::snippet_store::SnippetStore;

fn seed_store() -> SnippetStore {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("snipdeck-smoke-{unique}.json"));
    let mut store = SnippetStore::load(&path);
    store
        .add("git push origin main")
        .expect("seed snippet should persist");
    store
}

#[cfg(not(target_os = "windows"))]
#[test]
fn non_windows_fallback_smoke_still_filters() {
    let mut registrar = default_hotkey_registrar();
    let registration = registrar
        .register_hotkey("Ctrl+Alt+S")
        .expect("non-windows registrar should return noop registration");
    assert_eq!(
        registration,
        HotkeyRegistration::Noop("Ctrl+Alt+S".to_string())
    );
    registrar
        .unregister_all()
        .expect("non-windows registrar should unregister noop entries");

    let store = seed_store();
    let results = filter(store.snippets(), "git main", &FilterOptions::default());
    assert_eq!(results, vec!["git push origin main".to_string()]);

    // The clipboard shim is the documented unsupported path here.
    assert!(snipdeck_core::clipboard::set_text("x").is_err());

    std::fs::remove_file(store.path()).expect("temp store file should be removed");
}

#[cfg(target_os = "windows")]
#[test]
fn windows_runtime_smoke_registers_hotkey_and_filters() {
    if std::env::var("SNIPDECK_WINDOWS_RUNTIME_SMOKE").as_deref() != Ok("1") {
        eprintln!("skipping windows runtime smoke (set SNIPDECK_WINDOWS_RUNTIME_SMOKE=1 to enable)");
        return;
    }

    let mut registrar = default_hotkey_registrar();
    let candidates = ["Ctrl+Shift+F12", "Ctrl+Shift+F11", "Alt+F10"];

    let mut registration = None;
    for candidate in candidates {
        match registrar.register_hotkey(candidate) {
            Ok(registered) => {
                registration = Some(registered);
                break;
            }
            Err(_) => continue,
        }
    }

    let registered = registration.expect("expected at least one hotkey registration to succeed");
    match registered {
        HotkeyRegistration::Native(_) => {}
        other => panic!("expected native registration on windows, got {other:?}"),
    }

    registrar
        .unregister_all()
        .expect("unregister should succeed after registration");

    let store = seed_store();
    let results = filter(store.snippets(), "git main", &FilterOptions::default());
    assert_eq!(results, vec!["git push origin main".to_string()]);

    std::fs::remove_file(store.path()).expect("temp store file should be removed");
}
