#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ShowAndFocus,
    Hide,
    FocusExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherState {
    visible: bool,
}

impl Default for LauncherState {
    fn default() -> Self {
        Self { visible: false }
    }
}

impl LauncherState {
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_hotkey(&mut self, has_focus: bool) -> HotkeyAction {
        if !self.visible {
            self.visible = true;
            return HotkeyAction::ShowAndFocus;
        }

        if has_focus {
            self.visible = false;
            return HotkeyAction::Hide;
        }

        HotkeyAction::FocusExisting
    }

    pub fn on_escape(&mut self) -> bool {
        if self.visible {
            self.visible = false;
            return true;
        }
        false
    }
}

/// Query text carried across activation cycles. With keep-search on the
/// text typed before hiding comes back on the next show; with it off
/// every cycle starts from an empty field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMemory {
    keep_search: bool,
    text: String,
}

impl SearchMemory {
    pub fn new(keep_search: bool, initial: &str) -> Self {
        Self {
            keep_search,
            text: if keep_search {
                initial.to_string()
            } else {
                String::new()
            },
        }
    }

    pub fn keep_search(&self) -> bool {
        self.keep_search
    }

    /// Turning keep-search off forgets the remembered text immediately.
    pub fn set_keep_search(&mut self, keep_search: bool) {
        self.keep_search = keep_search;
        if !keep_search {
            self.text.clear();
        }
    }

    /// Called when the window hides, with whatever the query field held.
    pub fn remember(&mut self, current: &str) {
        if self.keep_search {
            self.text = current.to_string();
        } else {
            self.text.clear();
        }
    }

    pub fn text_for_show(&self) -> &str {
        &self.text
    }
}
