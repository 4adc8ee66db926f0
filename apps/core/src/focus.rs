//! Previous-focus capture and paste injection. Capture happens right
//! before the launcher takes the foreground; restore runs after it hides
//! again. Both are best-effort: callers log failures and move on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusActivationError {
    WindowGone,
    ActivationRefused,
    PasteRejected,
    UnsupportedPlatform,
}

impl std::fmt::Display for FocusActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowGone => write!(f, "previous window no longer exists"),
            Self::ActivationRefused => write!(f, "foreground activation was refused"),
            Self::PasteRejected => write!(f, "paste keystroke injection was rejected"),
            Self::UnsupportedPlatform => write!(f, "focus restoration is unsupported here"),
        }
    }
}

impl std::error::Error for FocusActivationError {}

/// Raw handle of the window that held focus before the hotkey fired.
/// Valid for a single activation cycle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousFocus(isize);

impl PreviousFocus {
    pub fn raw(&self) -> isize {
        self.0
    }
}

#[cfg(target_os = "windows")]
pub fn capture_foreground() -> Option<PreviousFocus> {
    use windows_sys::Win32::UI::WindowsAndMessaging::GetForegroundWindow;

    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.is_null() {
        None
    } else {
        Some(PreviousFocus(hwnd as isize))
    }
}

#[cfg(not(target_os = "windows"))]
pub fn capture_foreground() -> Option<PreviousFocus> {
    None
}

/// Reactivates the captured window and injects a Ctrl+V chord. The
/// caller is expected to have hidden the launcher and waited for the OS
/// focus transfer to settle first.
#[cfg(target_os = "windows")]
pub fn restore_and_paste(previous: PreviousFocus) -> Result<(), FocusActivationError> {
    use windows_sys::Win32::Foundation::HWND;
    use windows_sys::Win32::UI::WindowsAndMessaging::{IsWindow, SetForegroundWindow};

    let hwnd = previous.raw() as HWND;
    unsafe {
        if IsWindow(hwnd) == 0 {
            return Err(FocusActivationError::WindowGone);
        }
        if SetForegroundWindow(hwnd) == 0 {
            return Err(FocusActivationError::ActivationRefused);
        }
    }

    send_paste_chord()
}

#[cfg(not(target_os = "windows"))]
pub fn restore_and_paste(_previous: PreviousFocus) -> Result<(), FocusActivationError> {
    Err(FocusActivationError::UnsupportedPlatform)
}

#[cfg(target_os = "windows")]
fn send_paste_chord() -> Result<(), FocusActivationError> {
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
        SendInput, INPUT, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_KEYUP, VIRTUAL_KEY, VK_CONTROL,
    };

    const VK_V: VIRTUAL_KEY = 0x56;

    fn key_event(vk: VIRTUAL_KEY, flags: u32) -> INPUT {
        let mut input: INPUT = unsafe { std::mem::zeroed() };
        input.r#type = INPUT_KEYBOARD;
        input.Anonymous.ki = KEYBDINPUT {
            wVk: vk,
            wScan: 0,
            dwFlags: flags,
            time: 0,
            dwExtraInfo: 0,
        };
        input
    }

    let chord = [
        key_event(VK_CONTROL, 0),
        key_event(VK_V, 0),
        key_event(VK_V, KEYEVENTF_KEYUP),
        key_event(VK_CONTROL, KEYEVENTF_KEYUP),
    ];

    let inserted = unsafe {
        SendInput(
            chord.len() as u32,
            chord.as_ptr(),
            std::mem::size_of::<INPUT>() as i32,
        )
    };
    if inserted != chord.len() as u32 {
        return Err(FocusActivationError::PasteRejected);
    }
    Ok(())
}
