#[cfg(target_os = "windows")]
mod imp {
    use std::ffi::c_void;
    use std::sync::OnceLock;

    use windows_sys::Win32::Foundation::{GetLastError, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
    use windows_sys::Win32::Graphics::Gdi::{
        CreateFontW, CreateSolidBrush, DeleteObject, SetBkMode, DEFAULT_CHARSET, DEFAULT_QUALITY,
        FF_DONTCARE, FW_NORMAL, OUT_DEFAULT_PRECIS, TRANSPARENT,
    };
    use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows_sys::Win32::UI::Controls::EM_SETSEL;
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
        SetFocus, VK_DOWN, VK_ESCAPE, VK_RETURN, VK_UP,
    };
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        CallWindowProcW, CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect,
        GetCursorPos, GetForegroundWindow, GetMessageW, GetParent, GetSystemMetrics,
        GetWindowLongPtrW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW, IsChild,
        IsWindowVisible, LoadCursorW, MoveWindow, PostMessageW, PostQuitMessage, RegisterClassW,
        SendMessageW, SetForegroundWindow, SetWindowLongPtrW, SetWindowPos, SetWindowTextW,
        ShowWindow, TranslateMessage, CREATESTRUCTW, CS_HREDRAW, CS_VREDRAW, EN_CHANGE,
        ES_AUTOHSCROLL, GWLP_USERDATA, GWLP_WNDPROC, HMENU, HWND_NOTOPMOST, HWND_TOPMOST,
        IDC_ARROW, LBN_DBLCLK, LBS_NOTIFY, LB_ADDSTRING, LB_GETCOUNT, LB_GETCURSEL,
        LB_RESETCONTENT, LB_SETCURSEL, MSG, SM_CXSCREEN, SM_CYSCREEN, SWP_NOACTIVATE, SWP_NOMOVE,
        SWP_NOSIZE, SWP_NOZORDER, SW_HIDE, SW_SHOW, WM_APP, WM_CLOSE, WM_COMMAND, WM_CREATE,
        WM_CTLCOLORSTATIC, WM_DESTROY, WM_HOTKEY, WM_KEYDOWN, WM_LBUTTONDBLCLK, WM_NCCREATE,
        WM_NCDESTROY, WM_RBUTTONUP, WM_SETFONT, WM_SIZE, WNDCLASSW, WNDPROC, WS_BORDER,
        WS_CAPTION, WS_CHILD, WS_CLIPCHILDREN, WS_EX_TOOLWINDOW, WS_SYSMENU, WS_TABSTOP,
        WS_THICKFRAME, WS_VISIBLE, WS_VSCROLL,
    };

    use crate::settings::Settings;
    use crate::tray;

    const CLASS_NAME: &str = "SnipDeckLauncherWindowClass";
    const WINDOW_TITLE: &str = "SnipDeck";
    const INPUT_CLASS: &str = "EDIT";
    const LIST_CLASS: &str = "LISTBOX";
    const STATIC_CLASS: &str = "STATIC";
    const BUTTON_CLASS: &str = "BUTTON";
    const FONT_FAMILY: &str = "Segoe UI";

    // Layout tokens.
    const MARGIN: i32 = 10;
    const GAP: i32 = 6;
    const INPUT_HEIGHT: i32 = 24;
    const CHECK_HEIGHT: i32 = 20;
    const CHECK_GAP: i32 = 4;
    const BUTTON_WIDTH: i32 = 72;
    const BUTTON_HEIGHT: i32 = 26;
    const STATUS_HEIGHT: i32 = 18;
    const FONT_HEIGHT: i32 = -15;
    const COLOR_WINDOW_BG: u32 = 0x00F0F0F0;

    const CONTROL_ID_INPUT: usize = 1001;
    const CONTROL_ID_LIST: usize = 1002;
    const CONTROL_ID_STATUS: usize = 1003;
    const CONTROL_ID_ADD: usize = 1101;
    const CONTROL_ID_EDIT: usize = 1102;
    const CONTROL_ID_DELETE: usize = 1103;
    const CONTROL_ID_CHECK_EXACT: usize = 1201;
    const CONTROL_ID_CHECK_REGEX: usize = 1202;
    const CONTROL_ID_CHECK_CASE: usize = 1203;
    const CONTROL_ID_CHECK_KEEP: usize = 1204;
    const CONTROL_ID_CHECK_TOP: usize = 1205;

    // Button-class styles and messages the way the settings dialog
    // declares them; windows-sys scatters these across features.
    const BUTTON_AUTOCHECKBOX: u32 = 0x00000003;
    const BUTTON_PUSH: u32 = 0x00000000;
    const BN_CLICKED: usize = 0;
    const BM_GETCHECK: u32 = 0x00F0;
    const BM_SETCHECK: u32 = 0x00F1;
    const BST_CHECKED: usize = 1;
    const LB_ERR: isize = -1;

    const SNIPDECK_WM_ESCAPE: u32 = WM_APP + 1;
    const SNIPDECK_WM_QUERY_CHANGED: u32 = WM_APP + 2;
    const SNIPDECK_WM_MOVE_UP: u32 = WM_APP + 3;
    const SNIPDECK_WM_MOVE_DOWN: u32 = WM_APP + 4;
    const SNIPDECK_WM_SUBMIT: u32 = WM_APP + 5;
    const SNIPDECK_WM_CLOSE_REQUESTED: u32 = WM_APP + 7;
    const SNIPDECK_WM_ADD: u32 = WM_APP + 8;
    const SNIPDECK_WM_EDIT: u32 = WM_APP + 9;
    const SNIPDECK_WM_DELETE: u32 = WM_APP + 10;
    const SNIPDECK_WM_TOGGLE: u32 = WM_APP + 11;
    const SNIPDECK_WM_RESIZED: u32 = WM_APP + 12;
    const SNIPDECK_WM_TRAY_SHOW: u32 = WM_APP + 13;
    const SNIPDECK_WM_TRAY_QUIT: u32 = WM_APP + 14;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LauncherEvent {
        Hotkey(i32),
        QueryChanged(String),
        MoveSelection(i32),
        Submit,
        Escape,
        CloseRequested,
        AddPressed,
        EditPressed,
        DeletePressed,
        ToggleChanged(LauncherToggle, bool),
        Resized(i32, i32),
        TrayShowWindow,
        TrayQuit,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LauncherToggle {
        ExactMatch,
        RegexMode,
        CaseSensitive,
        KeepSearch,
        AlwaysOnTop,
    }

    pub struct LauncherShell {
        hwnd: HWND,
    }

    struct LauncherShellState {
        input_hwnd: HWND,
        list_hwnd: HWND,
        status_hwnd: HWND,
        add_button_hwnd: HWND,
        edit_button_hwnd: HWND,
        delete_button_hwnd: HWND,
        exact_check_hwnd: HWND,
        regex_check_hwnd: HWND,
        case_check_hwnd: HWND,
        keep_check_hwnd: HWND,
        top_check_hwnd: HWND,

        input_prev_proc: isize,
        list_prev_proc: isize,

        ui_font: isize,
        background_brush: isize,
    }

    impl Default for LauncherShellState {
        fn default() -> Self {
            Self {
                input_hwnd: std::ptr::null_mut(),
                list_hwnd: std::ptr::null_mut(),
                status_hwnd: std::ptr::null_mut(),
                add_button_hwnd: std::ptr::null_mut(),
                edit_button_hwnd: std::ptr::null_mut(),
                delete_button_hwnd: std::ptr::null_mut(),
                exact_check_hwnd: std::ptr::null_mut(),
                regex_check_hwnd: std::ptr::null_mut(),
                case_check_hwnd: std::ptr::null_mut(),
                keep_check_hwnd: std::ptr::null_mut(),
                top_check_hwnd: std::ptr::null_mut(),
                input_prev_proc: 0,
                list_prev_proc: 0,
                ui_font: 0,
                background_brush: 0,
            }
        }
    }

    impl LauncherShell {
        pub fn create(width: i32, height: i32) -> Result<Self, String> {
            let instance = unsafe { GetModuleHandleW(std::ptr::null()) };
            let class_name = class_name_wide();

            let mut class: WNDCLASSW = unsafe { std::mem::zeroed() };
            class.style = CS_HREDRAW | CS_VREDRAW;
            class.lpfnWndProc = Some(launcher_wnd_proc);
            class.hInstance = instance;
            class.hCursor = unsafe { LoadCursorW(std::ptr::null_mut(), IDC_ARROW) };
            class.hbrBackground = std::ptr::null_mut();
            class.lpszClassName = class_name.as_ptr();

            let atom = unsafe { RegisterClassW(&class) };
            if atom == 0 {
                let error = unsafe { GetLastError() };
                // 1410 = ERROR_CLASS_ALREADY_EXISTS
                if error != 1410 {
                    return Err(format!("RegisterClassW failed with error {error}"));
                }
            }

            let state = Box::new(LauncherShellState::default());
            let state_ptr = Box::into_raw(state);

            let hwnd = unsafe {
                CreateWindowExW(
                    WS_EX_TOOLWINDOW,
                    class_name.as_ptr(),
                    to_wide(WINDOW_TITLE).as_ptr(),
                    WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_CLIPCHILDREN,
                    0,
                    0,
                    width,
                    height,
                    std::ptr::null_mut(),
                    0 as HMENU,
                    instance,
                    state_ptr as *mut c_void,
                )
            };

            if hwnd.is_null() {
                unsafe {
                    let _ = Box::from_raw(state_ptr);
                }
                let error = unsafe { GetLastError() };
                return Err(format!("CreateWindowExW failed with error {error}"));
            }

            Ok(Self { hwnd })
        }

        pub fn raw_hwnd(&self) -> HWND {
            self.hwnd
        }

        pub fn is_visible(&self) -> bool {
            unsafe { IsWindowVisible(self.hwnd) != 0 }
        }

        pub fn has_focus(&self) -> bool {
            let fg = unsafe { GetForegroundWindow() };
            if fg == self.hwnd {
                return true;
            }
            unsafe { IsChild(self.hwnd, fg) != 0 }
        }

        /// Moves the window to the pointer (clamped to the screen),
        /// shows it, takes foreground, and focuses the query field.
        pub fn show_at_cursor(&self) {
            let mut point = POINT { x: 0, y: 0 };
            let mut rect: RECT = unsafe { std::mem::zeroed() };
            unsafe {
                GetCursorPos(&mut point);
                GetWindowRect(self.hwnd, &mut rect);
            }
            let width = rect.right - rect.left;
            let height = rect.bottom - rect.top;
            let screen_width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
            let screen_height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
            let x = point.x.min(screen_width - width).max(0);
            let y = point.y.min(screen_height - height).max(0);

            unsafe {
                MoveWindow(self.hwnd, x, y, width, height, 1);
                ShowWindow(self.hwnd, SW_SHOW);
                SetForegroundWindow(self.hwnd);
            }
            self.focus_input_and_select_all();
        }

        pub fn hide(&self) {
            unsafe {
                ShowWindow(self.hwnd, SW_HIDE);
            }
        }

        pub fn focus_input_and_select_all(&self) {
            if let Some(state) = state_for(self.hwnd) {
                unsafe {
                    SetFocus(state.input_hwnd);
                    SendMessageW(state.input_hwnd, EM_SETSEL, 0, -1);
                }
            }
        }

        pub fn query_text(&self) -> String {
            let Some(state) = state_for(self.hwnd) else {
                return String::new();
            };
            get_window_text(state.input_hwnd)
        }

        pub fn set_query_text(&self, text: &str) {
            if let Some(state) = state_for(self.hwnd) {
                unsafe {
                    SetWindowTextW(state.input_hwnd, to_wide(text).as_ptr());
                }
            }
        }

        pub fn clear_query_text(&self) {
            self.set_query_text("");
        }

        pub fn set_rows(&self, rows: &[String], selected_index: usize) {
            let Some(state) = state_for(self.hwnd) else {
                return;
            };

            unsafe {
                SendMessageW(state.list_hwnd, LB_RESETCONTENT, 0, 0);
            }
            for row in rows {
                let wide = to_wide(row);
                unsafe {
                    SendMessageW(state.list_hwnd, LB_ADDSTRING, 0, wide.as_ptr() as LPARAM);
                }
            }
            if !rows.is_empty() {
                let clamped = selected_index.min(rows.len() - 1);
                unsafe {
                    SendMessageW(state.list_hwnd, LB_SETCURSEL, clamped, 0);
                }
            }
        }

        pub fn selected_index(&self) -> Option<usize> {
            let state = state_for(self.hwnd)?;
            let index = unsafe { SendMessageW(state.list_hwnd, LB_GETCURSEL, 0, 0) };
            if index == LB_ERR || index < 0 {
                None
            } else {
                Some(index as usize)
            }
        }

        pub fn set_selected_index(&self, selected_index: usize) {
            let Some(state) = state_for(self.hwnd) else {
                return;
            };
            let count = unsafe { SendMessageW(state.list_hwnd, LB_GETCOUNT, 0, 0) };
            if count <= 0 {
                return;
            }
            let clamped = selected_index.min((count as usize).saturating_sub(1));
            unsafe {
                SendMessageW(state.list_hwnd, LB_SETCURSEL, clamped, 0);
            }
        }

        pub fn set_status_text(&self, message: &str) {
            if let Some(state) = state_for(self.hwnd) {
                unsafe {
                    SetWindowTextW(state.status_hwnd, to_wide(message).as_ptr());
                }
            }
        }

        /// Relabels the Add button; it reads "Save" while an edit is
        /// pending.
        pub fn set_add_button_label(&self, label: &str) {
            if let Some(state) = state_for(self.hwnd) {
                unsafe {
                    SetWindowTextW(state.add_button_hwnd, to_wide(label).as_ptr());
                }
            }
        }

        pub fn set_always_on_top(&self, on_top: bool) {
            let insert_after = if on_top { HWND_TOPMOST } else { HWND_NOTOPMOST };
            unsafe {
                SetWindowPos(
                    self.hwnd,
                    insert_after,
                    0,
                    0,
                    0,
                    0,
                    SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
                );
            }
        }

        pub fn window_size(&self) -> (i32, i32) {
            let mut rect: RECT = unsafe { std::mem::zeroed() };
            unsafe {
                GetWindowRect(self.hwnd, &mut rect);
            }
            (rect.right - rect.left, rect.bottom - rect.top)
        }

        pub fn set_window_size(&self, width: i32, height: i32) {
            unsafe {
                SetWindowPos(
                    self.hwnd,
                    std::ptr::null_mut(),
                    0,
                    0,
                    width.max(240),
                    height.max(180),
                    SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
                );
            }
        }

        pub fn apply_toggle_states(&self, settings: &Settings) {
            let Some(state) = state_for(self.hwnd) else {
                return;
            };
            set_check(state.exact_check_hwnd, settings.exact_match);
            set_check(state.regex_check_hwnd, settings.regex_mode);
            set_check(state.case_check_hwnd, settings.case_sensitive);
            set_check(state.keep_check_hwnd, settings.keep_search);
            set_check(state.top_check_hwnd, settings.always_on_top);
        }

        /// Ends the message loop; the process is shutting down.
        pub fn request_quit(&self) {
            unsafe {
                PostQuitMessage(0);
            }
        }

        pub fn run_message_loop_with_events<F>(&self, mut on_event: F) -> Result<(), String>
        where
            F: FnMut(LauncherEvent),
        {
            let mut msg: MSG = unsafe { std::mem::zeroed() };
            loop {
                let status = unsafe { GetMessageW(&mut msg, std::ptr::null_mut(), 0, 0) };
                if status == -1 {
                    let err = unsafe { GetLastError() };
                    return Err(format!("GetMessageW failed with error {err}"));
                }
                if status == 0 {
                    return Ok(());
                }

                match msg.message {
                    WM_HOTKEY => on_event(LauncherEvent::Hotkey(msg.wParam as i32)),
                    SNIPDECK_WM_QUERY_CHANGED => {
                        on_event(LauncherEvent::QueryChanged(self.query_text()))
                    }
                    SNIPDECK_WM_MOVE_UP => on_event(LauncherEvent::MoveSelection(-1)),
                    SNIPDECK_WM_MOVE_DOWN => on_event(LauncherEvent::MoveSelection(1)),
                    SNIPDECK_WM_SUBMIT => on_event(LauncherEvent::Submit),
                    SNIPDECK_WM_ESCAPE => on_event(LauncherEvent::Escape),
                    SNIPDECK_WM_CLOSE_REQUESTED => on_event(LauncherEvent::CloseRequested),
                    SNIPDECK_WM_ADD => on_event(LauncherEvent::AddPressed),
                    SNIPDECK_WM_EDIT => on_event(LauncherEvent::EditPressed),
                    SNIPDECK_WM_DELETE => on_event(LauncherEvent::DeletePressed),
                    SNIPDECK_WM_TOGGLE => {
                        if let Some(toggle) = toggle_for_control(msg.wParam) {
                            on_event(LauncherEvent::ToggleChanged(toggle, msg.lParam != 0));
                        }
                    }
                    SNIPDECK_WM_RESIZED => on_event(LauncherEvent::Resized(
                        msg.wParam as i32,
                        msg.lParam as i32,
                    )),
                    SNIPDECK_WM_TRAY_SHOW => on_event(LauncherEvent::TrayShowWindow),
                    SNIPDECK_WM_TRAY_QUIT => on_event(LauncherEvent::TrayQuit),
                    _ => {}
                }

                unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }
    }

    extern "system" fn launcher_wnd_proc(
        hwnd: HWND,
        message: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match message {
            WM_NCCREATE => {
                let create = lparam as *const CREATESTRUCTW;
                if create.is_null() {
                    return 0;
                }
                let state_ptr = unsafe { (*create).lpCreateParams as *mut LauncherShellState };
                unsafe {
                    SetWindowLongPtrW(hwnd, GWLP_USERDATA, state_ptr as isize);
                }
                1
            }
            WM_CREATE => {
                if let Some(state) = state_for(hwnd) {
                    create_children(hwnd, state);
                    layout_children(hwnd, state);
                }
                0
            }
            WM_COMMAND => {
                let control_id = wparam & 0xffff;
                let notification = (wparam >> 16) & 0xffff;
                if control_id == CONTROL_ID_INPUT && notification as u32 == EN_CHANGE as u32 {
                    unsafe {
                        PostMessageW(hwnd, SNIPDECK_WM_QUERY_CHANGED, 0, 0);
                    }
                    return 0;
                }
                if control_id == CONTROL_ID_LIST && notification as u32 == LBN_DBLCLK as u32 {
                    unsafe {
                        PostMessageW(hwnd, SNIPDECK_WM_SUBMIT, 0, 0);
                    }
                    return 0;
                }
                if notification == BN_CLICKED {
                    match control_id {
                        CONTROL_ID_ADD => {
                            unsafe {
                                PostMessageW(hwnd, SNIPDECK_WM_ADD, 0, 0);
                            }
                            return 0;
                        }
                        CONTROL_ID_EDIT => {
                            unsafe {
                                PostMessageW(hwnd, SNIPDECK_WM_EDIT, 0, 0);
                            }
                            return 0;
                        }
                        CONTROL_ID_DELETE => {
                            unsafe {
                                PostMessageW(hwnd, SNIPDECK_WM_DELETE, 0, 0);
                            }
                            return 0;
                        }
                        CONTROL_ID_CHECK_EXACT
                        | CONTROL_ID_CHECK_REGEX
                        | CONTROL_ID_CHECK_CASE
                        | CONTROL_ID_CHECK_KEEP
                        | CONTROL_ID_CHECK_TOP => {
                            let checked = unsafe {
                                SendMessageW(lparam as HWND, BM_GETCHECK, 0, 0) as usize
                                    == BST_CHECKED
                            };
                            unsafe {
                                PostMessageW(
                                    hwnd,
                                    SNIPDECK_WM_TOGGLE,
                                    control_id,
                                    checked as LPARAM,
                                );
                            }
                            return 0;
                        }
                        _ => {}
                    }
                }
                unsafe { DefWindowProcW(hwnd, message, wparam, lparam) }
            }
            WM_CTLCOLORSTATIC => {
                if let Some(state) = state_for(hwnd) {
                    unsafe {
                        SetBkMode(wparam as _, TRANSPARENT as i32);
                    }
                    return state.background_brush;
                }
                unsafe { DefWindowProcW(hwnd, message, wparam, lparam) }
            }
            WM_SIZE => {
                if let Some(state) = state_for(hwnd) {
                    layout_children(hwnd, state);
                }
                let mut rect: RECT = unsafe { std::mem::zeroed() };
                unsafe {
                    GetWindowRect(hwnd, &mut rect);
                    PostMessageW(
                        hwnd,
                        SNIPDECK_WM_RESIZED,
                        (rect.right - rect.left) as WPARAM,
                        (rect.bottom - rect.top) as LPARAM,
                    );
                }
                0
            }
            // The title-bar close control hides; quitting lives in the
            // tray menu.
            WM_CLOSE => {
                unsafe {
                    PostMessageW(hwnd, SNIPDECK_WM_CLOSE_REQUESTED, 0, 0);
                }
                0
            }
            WM_DESTROY => {
                unsafe {
                    PostQuitMessage(0);
                }
                0
            }
            WM_NCDESTROY => {
                let state_ptr =
                    unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut LauncherShellState };
                if !state_ptr.is_null() {
                    unsafe {
                        cleanup_state_resources(&mut *state_ptr);
                        let _ = Box::from_raw(state_ptr);
                        SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                    }
                }
                0
            }
            tray::WM_TRAY_CALLBACK => {
                let tray_message = lparam as u32;
                if tray_message == WM_RBUTTONUP {
                    match tray::show_menu(hwnd) {
                        Some(tray::TrayCommand::ShowWindow) => unsafe {
                            PostMessageW(hwnd, SNIPDECK_WM_TRAY_SHOW, 0, 0);
                        },
                        Some(tray::TrayCommand::Quit) => unsafe {
                            PostMessageW(hwnd, SNIPDECK_WM_TRAY_QUIT, 0, 0);
                        },
                        None => {}
                    }
                } else if tray_message == WM_LBUTTONDBLCLK {
                    unsafe {
                        PostMessageW(hwnd, SNIPDECK_WM_TRAY_SHOW, 0, 0);
                    }
                }
                0
            }
            SNIPDECK_WM_ESCAPE
            | SNIPDECK_WM_QUERY_CHANGED
            | SNIPDECK_WM_MOVE_UP
            | SNIPDECK_WM_MOVE_DOWN
            | SNIPDECK_WM_SUBMIT
            | SNIPDECK_WM_CLOSE_REQUESTED
            | SNIPDECK_WM_ADD
            | SNIPDECK_WM_EDIT
            | SNIPDECK_WM_DELETE
            | SNIPDECK_WM_TOGGLE
            | SNIPDECK_WM_RESIZED
            | SNIPDECK_WM_TRAY_SHOW
            | SNIPDECK_WM_TRAY_QUIT => 0,
            _ => unsafe { DefWindowProcW(hwnd, message, wparam, lparam) },
        }
    }

    extern "system" fn control_subclass_proc(
        hwnd: HWND,
        message: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        let parent = unsafe { GetParent(hwnd) };
        if parent.is_null() {
            return unsafe { DefWindowProcW(hwnd, message, wparam, lparam) };
        }

        if message == WM_KEYDOWN {
            match wparam as u16 {
                VK_ESCAPE => {
                    unsafe {
                        PostMessageW(parent, SNIPDECK_WM_ESCAPE, 0, 0);
                    }
                    return 0;
                }
                VK_UP => {
                    unsafe {
                        PostMessageW(parent, SNIPDECK_WM_MOVE_UP, 0, 0);
                    }
                    return 0;
                }
                VK_DOWN => {
                    unsafe {
                        PostMessageW(parent, SNIPDECK_WM_MOVE_DOWN, 0, 0);
                    }
                    return 0;
                }
                VK_RETURN => {
                    unsafe {
                        PostMessageW(parent, SNIPDECK_WM_SUBMIT, 0, 0);
                    }
                    return 0;
                }
                _ => {}
            }
        }

        let Some(state) = state_for(parent) else {
            return unsafe { DefWindowProcW(hwnd, message, wparam, lparam) };
        };

        let prev_ptr = if hwnd == state.input_hwnd {
            state.input_prev_proc
        } else if hwnd == state.list_hwnd {
            state.list_prev_proc
        } else {
            0
        };

        if prev_ptr == 0 {
            return unsafe { DefWindowProcW(hwnd, message, wparam, lparam) };
        }

        let prev_proc = unsafe { std::mem::transmute::<isize, WNDPROC>(prev_ptr) };
        unsafe { CallWindowProcW(prev_proc, hwnd, message, wparam, lparam) }
    }

    fn create_children(hwnd: HWND, state: &mut LauncherShellState) {
        state.background_brush = unsafe { CreateSolidBrush(COLOR_WINDOW_BG) } as isize;
        state.ui_font = create_font(FONT_HEIGHT, FW_NORMAL as i32);

        state.input_hwnd = create_control(
            hwnd,
            INPUT_CLASS,
            "",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | WS_BORDER | ES_AUTOHSCROLL as u32,
            CONTROL_ID_INPUT,
        );
        state.list_hwnd = create_control(
            hwnd,
            LIST_CLASS,
            "",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | WS_BORDER | WS_VSCROLL | LBS_NOTIFY as u32,
            CONTROL_ID_LIST,
        );
        state.status_hwnd = create_control(
            hwnd,
            STATIC_CLASS,
            "",
            WS_CHILD | WS_VISIBLE,
            CONTROL_ID_STATUS,
        );

        state.add_button_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Add",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_PUSH,
            CONTROL_ID_ADD,
        );
        state.edit_button_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Edit",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_PUSH,
            CONTROL_ID_EDIT,
        );
        state.delete_button_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Delete",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_PUSH,
            CONTROL_ID_DELETE,
        );

        state.exact_check_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Exact",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_AUTOCHECKBOX,
            CONTROL_ID_CHECK_EXACT,
        );
        state.regex_check_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Regex",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_AUTOCHECKBOX,
            CONTROL_ID_CHECK_REGEX,
        );
        state.case_check_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Case",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_AUTOCHECKBOX,
            CONTROL_ID_CHECK_CASE,
        );
        state.keep_check_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "Keep",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_AUTOCHECKBOX,
            CONTROL_ID_CHECK_KEEP,
        );
        state.top_check_hwnd = create_control(
            hwnd,
            BUTTON_CLASS,
            "On top",
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | BUTTON_AUTOCHECKBOX,
            CONTROL_ID_CHECK_TOP,
        );

        let font = state.ui_font as usize;
        for control in [
            state.input_hwnd,
            state.list_hwnd,
            state.status_hwnd,
            state.add_button_hwnd,
            state.edit_button_hwnd,
            state.delete_button_hwnd,
            state.exact_check_hwnd,
            state.regex_check_hwnd,
            state.case_check_hwnd,
            state.keep_check_hwnd,
            state.top_check_hwnd,
        ] {
            unsafe {
                SendMessageW(control, WM_SETFONT, font, 1);
            }
        }

        unsafe {
            state.input_prev_proc = SetWindowLongPtrW(
                state.input_hwnd,
                GWLP_WNDPROC,
                control_subclass_proc as *const () as isize,
            );
            state.list_prev_proc = SetWindowLongPtrW(
                state.list_hwnd,
                GWLP_WNDPROC,
                control_subclass_proc as *const () as isize,
            );
        }
    }

    fn layout_children(hwnd: HWND, state: &mut LauncherShellState) {
        let mut client: RECT = unsafe { std::mem::zeroed() };
        unsafe {
            GetClientRect(hwnd, &mut client);
        }
        let width = (client.right - client.left).max(2 * MARGIN + 40);
        let height = client.bottom - client.top;
        let inner = width - 2 * MARGIN;

        let input_top = MARGIN;
        let checks_top = input_top + INPUT_HEIGHT + GAP;
        let list_top = checks_top + CHECK_HEIGHT + GAP;
        let status_top = height - MARGIN - STATUS_HEIGHT;
        let buttons_top = status_top - GAP - BUTTON_HEIGHT;
        let list_height = (buttons_top - GAP - list_top).max(CHECK_HEIGHT);

        unsafe {
            MoveWindow(state.input_hwnd, MARGIN, input_top, inner, INPUT_HEIGHT, 1);
        }

        let check_width = (inner - 4 * CHECK_GAP) / 5;
        let checks = [
            state.exact_check_hwnd,
            state.regex_check_hwnd,
            state.case_check_hwnd,
            state.keep_check_hwnd,
            state.top_check_hwnd,
        ];
        for (index, check) in checks.iter().enumerate() {
            let x = MARGIN + (index as i32) * (check_width + CHECK_GAP);
            unsafe {
                MoveWindow(*check, x, checks_top, check_width, CHECK_HEIGHT, 1);
            }
        }

        unsafe {
            MoveWindow(state.list_hwnd, MARGIN, list_top, inner, list_height, 1);
            MoveWindow(
                state.add_button_hwnd,
                MARGIN,
                buttons_top,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                1,
            );
            MoveWindow(
                state.edit_button_hwnd,
                MARGIN + BUTTON_WIDTH + GAP,
                buttons_top,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                1,
            );
            MoveWindow(
                state.delete_button_hwnd,
                MARGIN + 2 * (BUTTON_WIDTH + GAP),
                buttons_top,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                1,
            );
            MoveWindow(state.status_hwnd, MARGIN, status_top, inner, STATUS_HEIGHT, 1);
        }
    }

    fn create_control(parent: HWND, class_name: &str, text: &str, style: u32, id: usize) -> HWND {
        unsafe {
            CreateWindowExW(
                0,
                to_wide(class_name).as_ptr(),
                to_wide(text).as_ptr(),
                style,
                0,
                0,
                0,
                0,
                parent,
                id as HMENU,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        }
    }

    fn set_check(check_hwnd: HWND, checked: bool) {
        let value = if checked { BST_CHECKED } else { 0 };
        unsafe {
            SendMessageW(check_hwnd, BM_SETCHECK, value, 0);
        }
    }

    fn toggle_for_control(control_id: usize) -> Option<LauncherToggle> {
        match control_id {
            CONTROL_ID_CHECK_EXACT => Some(LauncherToggle::ExactMatch),
            CONTROL_ID_CHECK_REGEX => Some(LauncherToggle::RegexMode),
            CONTROL_ID_CHECK_CASE => Some(LauncherToggle::CaseSensitive),
            CONTROL_ID_CHECK_KEEP => Some(LauncherToggle::KeepSearch),
            CONTROL_ID_CHECK_TOP => Some(LauncherToggle::AlwaysOnTop),
            _ => None,
        }
    }

    fn get_window_text(hwnd: HWND) -> String {
        let length = unsafe { GetWindowTextLengthW(hwnd) };
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0_u16; length as usize + 1];
        let copied = unsafe { GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32) };
        String::from_utf16_lossy(&buffer[..copied as usize])
    }

    fn cleanup_state_resources(state: &mut LauncherShellState) {
        unsafe {
            if state.ui_font != 0 {
                DeleteObject(state.ui_font as _);
            }
            if state.background_brush != 0 {
                DeleteObject(state.background_brush as _);
            }
        }
    }

    fn state_for(hwnd: HWND) -> Option<&'static mut LauncherShellState> {
        let state_ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut LauncherShellState };
        if state_ptr.is_null() {
            None
        } else {
            Some(unsafe { &mut *state_ptr })
        }
    }

    fn class_name_wide() -> &'static [u16] {
        static CLASS_NAME_WIDE: OnceLock<Vec<u16>> = OnceLock::new();
        CLASS_NAME_WIDE.get_or_init(|| to_wide(CLASS_NAME)).as_slice()
    }

    fn create_font(height: i32, weight: i32) -> isize {
        static FONT_FAMILY_WIDE: OnceLock<Vec<u16>> = OnceLock::new();
        let family = FONT_FAMILY_WIDE.get_or_init(|| to_wide(FONT_FAMILY));
        (unsafe {
            CreateFontW(
                height,
                0,
                0,
                0,
                weight,
                0,
                0,
                0,
                DEFAULT_CHARSET as u32,
                OUT_DEFAULT_PRECIS as u32,
                0,
                DEFAULT_QUALITY as u32,
                FF_DONTCARE as u32,
                family.as_ptr(),
            )
        }) as isize
    }

    fn to_wide(value: &str) -> Vec<u16> {
        value.encode_utf16().chain(std::iter::once(0)).collect()
    }
}

#[cfg(target_os = "windows")]
pub use imp::{LauncherEvent, LauncherShell, LauncherToggle};
