use crate::config::{self, ConfigError};
use crate::hotkey_runtime::HotkeyRuntimeError;
use crate::logging;
use crate::settings::SettingsStore;
use crate::snippet_store::SnippetStore;

#[cfg(target_os = "windows")]
use crate::config::Config;
#[cfg(target_os = "windows")]
use crate::filter::{filter, FilterOptions};
#[cfg(target_os = "windows")]
use crate::hotkey_runtime::{default_hotkey_registrar, HotkeyRegistration};
#[cfg(target_os = "windows")]
use crate::launcher_state::{HotkeyAction, LauncherState, SearchMemory};
#[cfg(target_os = "windows")]
use crate::windows_launcher::{LauncherEvent, LauncherShell, LauncherToggle};
#[cfg(target_os = "windows")]
use crate::{clipboard, focus, tray};

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Hotkey(HotkeyRuntimeError),
    Shell(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Hotkey(error) => write!(f, "hotkey runtime error: {error:?}"),
            Self::Shell(error) => write!(f, "launcher shell error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<HotkeyRuntimeError> for RuntimeError {
    fn from(value: HotkeyRuntimeError) -> Self {
        Self::Hotkey(value)
    }
}

pub fn run() -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[snipdeck-core] logging init failed: {error}");
    }

    let config = config::load(None)?;
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[snipdeck-core] wrote default config to {}",
            config.config_path.display()
        );
    }
    println!(
        "[snipdeck-core] startup mode={} hotkey={} snippets_path={} settings_path={}",
        runtime_mode(),
        config.hotkey,
        config.snippets_path.display(),
        config.settings_path.display(),
    );

    let settings = SettingsStore::load(&config.settings_path);
    let store = SnippetStore::load(&config.snippets_path);
    logging::info(&format!(
        "startup snippets={} keep_search={} always_on_top={}",
        store.len(),
        settings.settings.keep_search,
        settings.settings.always_on_top,
    ));

    #[cfg(target_os = "windows")]
    {
        let mut settings = settings;
        let mut store = store;

        let _single_instance = match acquire_single_instance_guard() {
            Ok(guard) => guard,
            Err(error) => return Err(RuntimeError::Shell(error)),
        };
        if _single_instance.is_none() {
            println!("[snipdeck-core] runtime already active; exiting duplicate process");
            return Ok(());
        }

        let (width, height) = if settings.settings.save_window_size {
            (settings.settings.window_width, settings.settings.window_height)
        } else {
            (
                crate::settings::DEFAULT_WINDOW_WIDTH,
                crate::settings::DEFAULT_WINDOW_HEIGHT,
            )
        };
        let shell = LauncherShell::create(width, height).map_err(RuntimeError::Shell)?;
        shell.apply_toggle_states(&settings.settings);
        shell.set_always_on_top(settings.settings.always_on_top);
        println!("[snipdeck-core] native launcher shell initialized (hidden)");

        if let Err(error) = tray::add_icon(shell.raw_hwnd(), "SnipDeck") {
            logging::warn(&format!("tray icon unavailable: {error}"));
        }

        let mut registrar = default_hotkey_registrar();
        let registration = registrar.register_hotkey(&config.hotkey)?;
        log_registration(&registration);
        println!("[snipdeck-core] event loop running (native launcher)");

        let memory = SearchMemory::new(
            settings.settings.keep_search,
            &settings.settings.last_search_text,
        );
        let mut session = Session {
            config: &config,
            settings: &mut settings,
            store: &mut store,
            state: LauncherState::default(),
            memory,
            visible_rows: Vec::new(),
            editing_index: None,
            previous_focus: None,
        };

        let initial_query = session.memory.text_for_show().to_string();
        shell.set_query_text(&initial_query);
        refresh_rows(&shell, &mut session, &initial_query);

        shell
            .run_message_loop_with_events(|event| handle_event(&shell, &mut session, event))
            .map_err(RuntimeError::Shell)?;

        tray::remove_icon(shell.raw_hwnd());
        registrar.unregister_all()?;

        session.settings.settings.last_search_text =
            session.memory.text_for_show().to_string();
        if let Err(error) = session.settings.save() {
            logging::warn(&format!("failed to persist settings on exit: {error}"));
        }
        logging::info("runtime exited cleanly");
        Ok(())
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = (settings, store);
        println!("[snipdeck-core] non-windows runtime mode: no global hotkey loop");
        Ok(())
    }
}

fn runtime_mode() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "windows-hotkey-runtime"
    }

    #[cfg(not(target_os = "windows"))]
    {
        "non-windows-noop"
    }
}

#[cfg(target_os = "windows")]
struct Session<'a> {
    config: &'a Config,
    settings: &'a mut SettingsStore,
    store: &'a mut SnippetStore,
    state: LauncherState,
    memory: SearchMemory,
    visible_rows: Vec<String>,
    editing_index: Option<usize>,
    previous_focus: Option<focus::PreviousFocus>,
}

#[cfg(target_os = "windows")]
fn handle_event(shell: &LauncherShell, session: &mut Session<'_>, event: LauncherEvent) {
    match event {
        LauncherEvent::Hotkey(_) => {
            session.state.set_visible(shell.is_visible());
            match session.state.on_hotkey(shell.has_focus()) {
                HotkeyAction::ShowAndFocus => show_launcher(shell, session),
                HotkeyAction::FocusExisting => shell.focus_input_and_select_all(),
                HotkeyAction::Hide => hide_launcher(shell, session),
            }
        }
        LauncherEvent::Escape | LauncherEvent::CloseRequested => {
            if session.state.on_escape() {
                hide_launcher(shell, session);
            }
        }
        LauncherEvent::QueryChanged(query) => refresh_rows(shell, session, &query),
        LauncherEvent::MoveSelection(direction) => {
            if session.visible_rows.is_empty() {
                return;
            }
            let current = shell.selected_index().unwrap_or(0);
            let next = next_selection_index(current, session.visible_rows.len(), direction);
            shell.set_selected_index(next);
        }
        LauncherEvent::Submit => submit_selection(shell, session),
        LauncherEvent::AddPressed => commit_input(shell, session),
        LauncherEvent::EditPressed => begin_edit(shell, session),
        LauncherEvent::DeletePressed => delete_selection(shell, session),
        LauncherEvent::ToggleChanged(toggle, enabled) => {
            apply_toggle(shell, session, toggle, enabled)
        }
        LauncherEvent::Resized(width, height) => remember_window_size(session, width, height),
        LauncherEvent::TrayShowWindow => {
            session.state.set_visible(shell.is_visible());
            if session.state.is_visible() {
                shell.focus_input_and_select_all();
            } else {
                session.state.on_hotkey(false);
                show_launcher(shell, session);
            }
        }
        LauncherEvent::TrayQuit => shell.request_quit(),
    }
}

/// One show transition: the previous foreground window is captured
/// before the launcher steals it.
#[cfg(target_os = "windows")]
fn show_launcher(shell: &LauncherShell, session: &mut Session<'_>) {
    session.previous_focus = focus::capture_foreground();
    let restored = session.memory.text_for_show().to_string();
    shell.set_query_text(&restored);
    refresh_rows(shell, session, &restored);
    shell.show_at_cursor();
}

#[cfg(target_os = "windows")]
fn hide_launcher(shell: &LauncherShell, session: &mut Session<'_>) {
    finish_cycle(shell, session);
    shell.hide();
    session.previous_focus = None;
}

/// Shared tail of every hide: remember or clear the query per
/// keep-search and leave edit mode.
#[cfg(target_os = "windows")]
fn finish_cycle(shell: &LauncherShell, session: &mut Session<'_>) {
    session.memory.remember(&shell.query_text());
    if !session.memory.keep_search() {
        shell.clear_query_text();
    }
    reset_edit_mode(shell, session);

    let last = session.memory.text_for_show().to_string();
    if session.settings.settings.last_search_text != last {
        session.settings.settings.last_search_text = last;
        if let Err(error) = session.settings.save() {
            logging::warn(&format!("failed to persist settings: {error}"));
        }
    }
}

#[cfg(target_os = "windows")]
fn submit_selection(shell: &LauncherShell, session: &mut Session<'_>) {
    let Some(index) = shell.selected_index() else {
        shell.set_status_text("Nothing selected to paste.");
        return;
    };
    let Some(snippet) = session.visible_rows.get(index).cloned() else {
        return;
    };

    if let Err(error) = clipboard::set_text(&snippet) {
        logging::error(&format!("clipboard copy failed: {error}"));
        shell.set_status_text("Clipboard error; snippet not copied.");
        return;
    }

    session.state.on_escape();
    finish_cycle(shell, session);
    shell.hide();

    // Give the OS time to settle the focus transfer before reactivating
    // the previous window and injecting Ctrl+V.
    std::thread::sleep(std::time::Duration::from_millis(session.config.paste_delay_ms));
    match session.previous_focus.take() {
        Some(previous) => {
            if let Err(error) = focus::restore_and_paste(previous) {
                logging::warn(&format!("focus restore failed: {error}; paste skipped"));
            }
        }
        None => logging::info("no previous window captured; paste skipped"),
    }
}

#[cfg(target_os = "windows")]
fn commit_input(shell: &LauncherShell, session: &mut Session<'_>) {
    let text = shell.query_text();
    let editing = session.editing_index;
    let result = match editing {
        Some(index) => session.store.edit(index, &text),
        None => session.store.add(&text),
    };

    match result {
        Ok(changed) => {
            if editing.is_some() || changed {
                reset_edit_mode(shell, session);
                shell.clear_query_text();
                refresh_rows(shell, session, "");
                shell.focus_input_and_select_all();
            } else {
                shell.set_status_text("Not added: empty or duplicate snippet.");
            }
        }
        Err(error) => {
            logging::error(&format!("snippet persistence failed: {error}"));
            shell.set_status_text("Could not save snippets to disk.");
        }
    }
}

#[cfg(target_os = "windows")]
fn begin_edit(shell: &LauncherShell, session: &mut Session<'_>) {
    let Some(index) = shell.selected_index() else {
        return;
    };
    let Some(snippet) = session.visible_rows.get(index).cloned() else {
        return;
    };
    let Some(store_index) = session.store.position_of(&snippet) else {
        return;
    };

    session.editing_index = Some(store_index);
    shell.set_add_button_label("Save");
    shell.set_query_text(&snippet);
    shell.focus_input_and_select_all();
}

#[cfg(target_os = "windows")]
fn delete_selection(shell: &LauncherShell, session: &mut Session<'_>) {
    let Some(index) = shell.selected_index() else {
        return;
    };
    let Some(snippet) = session.visible_rows.get(index).cloned() else {
        return;
    };

    match session.store.delete(&snippet) {
        Ok(true) => {
            // Store positions shifted; a pending edit index is stale.
            reset_edit_mode(shell, session);
            let query = shell.query_text();
            refresh_rows(shell, session, &query);
            shell.focus_input_and_select_all();
        }
        Ok(false) => {}
        Err(error) => {
            logging::error(&format!("snippet persistence failed: {error}"));
            shell.set_status_text("Could not save snippets to disk.");
        }
    }
}

#[cfg(target_os = "windows")]
fn apply_toggle(
    shell: &LauncherShell,
    session: &mut Session<'_>,
    toggle: LauncherToggle,
    enabled: bool,
) {
    {
        let settings = &mut session.settings.settings;
        match toggle {
            LauncherToggle::ExactMatch => settings.exact_match = enabled,
            LauncherToggle::RegexMode => settings.regex_mode = enabled,
            LauncherToggle::CaseSensitive => settings.case_sensitive = enabled,
            LauncherToggle::KeepSearch => settings.keep_search = enabled,
            LauncherToggle::AlwaysOnTop => settings.always_on_top = enabled,
        }
    }

    match toggle {
        LauncherToggle::AlwaysOnTop => shell.set_always_on_top(enabled),
        LauncherToggle::KeepSearch => session.memory.set_keep_search(enabled),
        _ => {
            let query = shell.query_text();
            refresh_rows(shell, session, &query);
        }
    }

    if let Err(error) = session.settings.save() {
        logging::warn(&format!("failed to persist settings: {error}"));
    }
}

#[cfg(target_os = "windows")]
fn remember_window_size(session: &mut Session<'_>, width: i32, height: i32) {
    if !session.settings.settings.save_window_size || width <= 0 || height <= 0 {
        return;
    }
    let settings = &mut session.settings.settings;
    if settings.window_width == width && settings.window_height == height {
        return;
    }
    settings.window_width = width;
    settings.window_height = height;
    if let Err(error) = session.settings.save() {
        logging::warn(&format!("failed to persist settings: {error}"));
    }
}

#[cfg(target_os = "windows")]
fn refresh_rows(shell: &LauncherShell, session: &mut Session<'_>, query: &str) {
    let options = FilterOptions::from_settings(&session.settings.settings);
    session.visible_rows = filter(session.store.snippets(), query, &options);
    shell.set_rows(&session.visible_rows, 0);
    shell.set_status_text(&status_line(session.visible_rows.len(), session.store.len()));
}

#[cfg(target_os = "windows")]
fn reset_edit_mode(shell: &LauncherShell, session: &mut Session<'_>) {
    if session.editing_index.take().is_some() {
        shell.set_add_button_label("Add");
    }
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn status_line(visible: usize, total: usize) -> String {
    if total == 0 {
        "No snippets yet. Type text and press Add.".to_string()
    } else if visible == total {
        format!("{total} snippets")
    } else {
        format!("{visible} of {total} snippets")
    }
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn next_selection_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }

    let max = len - 1;
    if direction < 0 {
        current.saturating_sub(1)
    } else if direction > 0 {
        (current + 1).min(max)
    } else {
        current.min(max)
    }
}

#[cfg(target_os = "windows")]
fn log_registration(registration: &HotkeyRegistration) {
    match registration {
        HotkeyRegistration::Native(id) => {
            println!("[snipdeck-core] hotkey registered native_id={id}");
        }
        HotkeyRegistration::Noop(label) => {
            println!("[snipdeck-core] hotkey registered noop={label}");
        }
    }
}

#[cfg(target_os = "windows")]
struct SingleInstanceGuard {
    handle: windows_sys::Win32::Foundation::HANDLE,
}

#[cfg(target_os = "windows")]
impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        unsafe {
            windows_sys::Win32::Foundation::CloseHandle(self.handle);
        }
    }
}

#[cfg(target_os = "windows")]
fn acquire_single_instance_guard() -> Result<Option<SingleInstanceGuard>, String> {
    use windows_sys::Win32::Foundation::GetLastError;
    use windows_sys::Win32::System::Threading::CreateMutexW;

    let mutex_name = to_wide("Local\\SnipDeckRuntimeSingleton");
    let handle = unsafe { CreateMutexW(std::ptr::null(), 0, mutex_name.as_ptr()) };
    if handle.is_null() {
        let error = unsafe { GetLastError() };
        return Err(format!("CreateMutexW failed with error {error}"));
    }

    // ERROR_ALREADY_EXISTS
    let error = unsafe { GetLastError() };
    if error == 183 {
        unsafe {
            windows_sys::Win32::Foundation::CloseHandle(handle);
        }
        return Ok(None);
    }

    Ok(Some(SingleInstanceGuard { handle }))
}

#[cfg(target_os = "windows")]
fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::{next_selection_index, status_line};

    #[test]
    fn selection_index_bounds_are_stable() {
        assert_eq!(next_selection_index(0, 0, 1), 0);
        assert_eq!(next_selection_index(0, 3, -1), 0);
        assert_eq!(next_selection_index(1, 3, -1), 0);
        assert_eq!(next_selection_index(1, 3, 1), 2);
        assert_eq!(next_selection_index(2, 3, 1), 2);
        assert_eq!(next_selection_index(1, 3, 0), 1);
        assert_eq!(next_selection_index(5, 3, 0), 2);
    }

    #[test]
    fn status_line_reports_visible_and_total() {
        assert_eq!(status_line(0, 0), "No snippets yet. Type text and press Add.");
        assert_eq!(status_line(3, 3), "3 snippets");
        assert_eq!(status_line(1, 3), "1 of 3 snippets");
    }
}
