use crate::hotkey::parse_hotkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyRegistration {
    Native(i32),
    Noop(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyRuntimeError {
    InvalidHotkey(String),
    RegistrationFailed(String),
}

pub trait HotkeyRegistrar: Send {
    fn register_hotkey(&mut self, hotkey: &str) -> Result<HotkeyRegistration, HotkeyRuntimeError>;
    fn unregister_all(&mut self) -> Result<(), HotkeyRuntimeError>;
}

#[derive(Default)]
pub struct MockHotkeyRegistrar {
    registrations: Vec<String>,
}

impl MockHotkeyRegistrar {
    pub fn registrations(&self) -> &[String] {
        &self.registrations
    }
}

impl HotkeyRegistrar for MockHotkeyRegistrar {
    fn register_hotkey(&mut self, hotkey: &str) -> Result<HotkeyRegistration, HotkeyRuntimeError> {
        parse_hotkey(hotkey).map_err(HotkeyRuntimeError::InvalidHotkey)?;
        self.registrations.push(hotkey.to_string());
        Ok(HotkeyRegistration::Noop(hotkey.to_string()))
    }

    fn unregister_all(&mut self) -> Result<(), HotkeyRuntimeError> {
        self.registrations.clear();
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
#[derive(Default)]
pub struct NoopHotkeyRegistrar {
    registrations: Vec<String>,
}

#[cfg(not(target_os = "windows"))]
impl NoopHotkeyRegistrar {
    pub fn registrations(&self) -> &[String] {
        &self.registrations
    }
}

#[cfg(not(target_os = "windows"))]
impl HotkeyRegistrar for NoopHotkeyRegistrar {
    fn register_hotkey(&mut self, hotkey: &str) -> Result<HotkeyRegistration, HotkeyRuntimeError> {
        parse_hotkey(hotkey).map_err(HotkeyRuntimeError::InvalidHotkey)?;
        self.registrations.push(hotkey.to_string());
        Ok(HotkeyRegistration::Noop(hotkey.to_string()))
    }

    fn unregister_all(&mut self) -> Result<(), HotkeyRuntimeError> {
        self.registrations.clear();
        Ok(())
    }
}

#[cfg(target_os = "windows")]
pub struct WindowsHotkeyRegistrar {
    next_id: i32,
    registered_ids: Vec<i32>,
}

#[cfg(target_os = "windows")]
impl Default for WindowsHotkeyRegistrar {
    fn default() -> Self {
        Self {
            next_id: 1,
            registered_ids: Vec::new(),
        }
    }
}

#[cfg(target_os = "windows")]
impl HotkeyRegistrar for WindowsHotkeyRegistrar {
    fn register_hotkey(&mut self, hotkey: &str) -> Result<HotkeyRegistration, HotkeyRuntimeError> {
        use windows_sys::Win32::UI::Input::KeyboardAndMouse::RegisterHotKey;

        let parsed = parse_hotkey(hotkey).map_err(HotkeyRuntimeError::InvalidHotkey)?;
        let modifiers = modifier_flags(&parsed.modifiers)?;
        let vk = virtual_key(&parsed.key)?;

        let id = self.next_id;
        self.next_id += 1;

        let ok = unsafe { RegisterHotKey(std::ptr::null_mut(), id, modifiers, vk) };
        if ok == 0 {
            return Err(HotkeyRuntimeError::RegistrationFailed(format!(
                "RegisterHotKey failed for '{hotkey}'"
            )));
        }

        self.registered_ids.push(id);
        Ok(HotkeyRegistration::Native(id))
    }

    fn unregister_all(&mut self) -> Result<(), HotkeyRuntimeError> {
        use windows_sys::Win32::UI::Input::KeyboardAndMouse::UnregisterHotKey;

        for id in self.registered_ids.drain(..) {
            unsafe {
                UnregisterHotKey(std::ptr::null_mut(), id);
            }
        }
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn modifier_flags(modifiers: &[String]) -> Result<u32, HotkeyRuntimeError> {
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
        MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN,
    };

    let mut flags = 0_u32;
    for modifier in modifiers {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" => flags |= MOD_ALT,
            "ctrl" | "control" => flags |= MOD_CONTROL,
            "shift" => flags |= MOD_SHIFT,
            "win" | "meta" | "super" => flags |= MOD_WIN,
            _ => {
                return Err(HotkeyRuntimeError::InvalidHotkey(format!(
                    "unsupported modifier: {modifier}"
                )))
            }
        }
    }
    Ok(flags)
}

#[cfg(target_os = "windows")]
fn virtual_key(key: &str) -> Result<u32, HotkeyRuntimeError> {
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{VK_F1, VK_SPACE};

    let upper = key.to_ascii_uppercase();
    if upper == "SPACE" {
        return Ok(VK_SPACE as u32);
    }

    if let Some(number) = upper.strip_prefix('F') {
        if let Ok(parsed) = number.parse::<u32>() {
            if (1..=24).contains(&parsed) {
                return Ok(VK_F1 as u32 + parsed - 1);
            }
        }
    }

    if upper.len() == 1 {
        let byte = upper.as_bytes()[0];
        if byte.is_ascii_alphanumeric() {
            return Ok(byte as u32);
        }
    }

    Err(HotkeyRuntimeError::InvalidHotkey(format!(
        "unsupported key: {key}"
    )))
}

pub fn default_hotkey_registrar() -> Box<dyn HotkeyRegistrar> {
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsHotkeyRegistrar::default())
    }

    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NoopHotkeyRegistrar::default())
    }
}
