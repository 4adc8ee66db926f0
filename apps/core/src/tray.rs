#[cfg(target_os = "windows")]
mod imp {
    use windows_sys::Win32::Foundation::{HWND, POINT};
    use windows_sys::Win32::UI::Shell::{
        Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW,
    };
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW, SetForegroundWindow,
        TrackPopupMenu, IDI_APPLICATION, MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN, TPM_RETURNCMD,
        TPM_RIGHTBUTTON, WM_APP,
    };

    /// Callback message the icon posts to the launcher window.
    pub const WM_TRAY_CALLBACK: u32 = WM_APP + 6;

    const TRAY_ICON_ID: u32 = 1;
    const MENU_SHOW_WINDOW: usize = 3001;
    const MENU_QUIT: usize = 3002;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TrayCommand {
        ShowWindow,
        Quit,
    }

    pub fn add_icon(hwnd: HWND, tooltip: &str) -> Result<(), String> {
        let mut data: NOTIFYICONDATAW = unsafe { std::mem::zeroed() };
        data.cbSize = std::mem::size_of::<NOTIFYICONDATAW>() as u32;
        data.hWnd = hwnd;
        data.uID = TRAY_ICON_ID;
        data.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
        data.uCallbackMessage = WM_TRAY_CALLBACK;
        data.hIcon = unsafe { LoadIconW(std::ptr::null_mut(), IDI_APPLICATION) };

        for (i, unit) in tooltip.encode_utf16().enumerate() {
            if i >= data.szTip.len() - 1 {
                break;
            }
            data.szTip[i] = unit;
        }

        if unsafe { Shell_NotifyIconW(NIM_ADD, &data) } == 0 {
            return Err("Shell_NotifyIconW failed to add the tray icon".to_string());
        }
        Ok(())
    }

    pub fn remove_icon(hwnd: HWND) {
        let mut data: NOTIFYICONDATAW = unsafe { std::mem::zeroed() };
        data.cbSize = std::mem::size_of::<NOTIFYICONDATAW>() as u32;
        data.hWnd = hwnd;
        data.uID = TRAY_ICON_ID;
        unsafe {
            Shell_NotifyIconW(NIM_DELETE, &data);
        }
    }

    /// Blocks in TrackPopupMenu until the user picks an entry or
    /// dismisses the menu.
    pub fn show_menu(hwnd: HWND) -> Option<TrayCommand> {
        let menu = unsafe { CreatePopupMenu() };
        if menu.is_null() {
            return None;
        }

        unsafe {
            AppendMenuW(
                menu,
                MF_STRING,
                MENU_SHOW_WINDOW,
                to_wide("Show Window").as_ptr(),
            );
            AppendMenuW(menu, MF_STRING, MENU_QUIT, to_wide("Quit").as_ptr());
        }

        let mut point = POINT { x: 0, y: 0 };
        unsafe {
            GetCursorPos(&mut point);
            // The menu will not dismiss on an outside click unless the
            // owning window is foreground.
            SetForegroundWindow(hwnd);
        }

        let selected = unsafe {
            TrackPopupMenu(
                menu,
                TPM_LEFTALIGN | TPM_BOTTOMALIGN | TPM_RIGHTBUTTON | TPM_RETURNCMD,
                point.x,
                point.y,
                0,
                hwnd,
                std::ptr::null(),
            )
        };
        unsafe {
            DestroyMenu(menu);
        }

        match selected as usize {
            MENU_SHOW_WINDOW => Some(TrayCommand::ShowWindow),
            MENU_QUIT => Some(TrayCommand::Quit),
            _ => None,
        }
    }

    fn to_wide(value: &str) -> Vec<u16> {
        value.encode_utf16().chain(std::iter::once(0)).collect()
    }
}

#[cfg(target_os = "windows")]
pub use imp::{add_icon, remove_icon, show_menu, TrayCommand, WM_TRAY_CALLBACK};
