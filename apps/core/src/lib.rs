pub mod clipboard;
pub mod config;
pub mod filter;
pub mod focus;
pub mod hotkey;
pub mod hotkey_runtime;
pub mod launcher_state;
pub mod logging;
pub mod runtime;
pub mod settings;
pub mod snippet_store;
pub mod tray;
pub mod windows_launcher;
