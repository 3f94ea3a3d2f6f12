use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // Some terminals report Shift+Tab without the shift bit
        let modifiers = if event.code == KeyCode::BackTab {
            event.modifiers | KeyModifiers::SHIFT
        } else {
            event.modifiers
        };
        self.key == event.code && self.modifiers == modifiers
    }

    /// Human-readable key combination, e.g. `Ctrl+C`
    pub fn display(&self) -> String {
        let key = match self.key {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Tab".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            other => format!("{:?}", other),
        };

        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        parts.push(key);
        parts.join("+")
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: KeyBinding,

    /// Show help
    pub help: KeyBinding,

    /// Focus the next hotspot
    pub next_focus: KeyBinding,

    /// Focus the previous hotspot
    pub prev_focus: KeyBinding,

    /// Activate the focused hotspot
    pub activate: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit application"),
            help: KeyBinding::new(KeyCode::Char('g'), KeyModifiers::CONTROL, "Show/hide help"),
            next_focus: KeyBinding::new(KeyCode::Tab, KeyModifiers::NONE, "Next link or button"),
            prev_focus: KeyBinding::new(
                KeyCode::BackTab,
                KeyModifiers::SHIFT,
                "Previous link or button",
            ),
            activate: KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE, "Open or toggle the focused item"),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }

    /// Check if the event should show help
    pub fn should_show_help(&self, event: &KeyEvent) -> bool {
        self.help.matches(event)
    }

    /// Key/description rows for the help overlay
    pub fn help_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = [
            &self.quit,
            &self.help,
            &self.next_focus,
            &self.prev_focus,
            &self.activate,
        ]
        .iter()
        .map(|binding| (binding.display(), binding.description.clone()))
        .collect();

        for (key, description) in [
            ("Up/Down, j/k", "Scroll the page or the open dialog"),
            ("PgUp/PgDn, Home/End", "Scroll by a screen, jump to top or bottom"),
            ("1-5", "Jump to a section"),
            ("Esc", "Close the dialog or leave a form field"),
            ("q", "Close the dialog, or quit when none is open"),
            ("l / d", "Open the dialog's Learn More / Download link"),
        ] {
            entries.push((key.to_string(), description.to_string()));
        }
        entries
    }

    /// Get help text for all key bindings
    pub fn help_text(&self) -> String {
        self.help_entries()
            .into_iter()
            .map(|(key, description)| format!("{:<22}{}", key, description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
