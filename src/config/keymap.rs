//! Key binding configuration.
//!
//! Maps key presses to application actions. Bindings can be overridden per
//! action from the configuration file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Actions that can be bound to keys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Forward,
    Backward,
    First,
    Last,
    NextProject,
    ToggleTheme,
    ToggleLog,
    Quit,
}

impl KeyAction {
    /// Lookup order when two actions share a key.
    ///
    pub const ALL: [KeyAction; 8] = [
        KeyAction::Quit,
        KeyAction::Forward,
        KeyAction::Backward,
        KeyAction::First,
        KeyAction::Last,
        KeyAction::NextProject,
        KeyAction::ToggleTheme,
        KeyAction::ToggleLog,
    ];
}

/// A key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn shifted(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
            KeyCodeSerde::Home => KeyCode::Home,
            KeyCodeSerde::End => KeyCode::End,
            KeyCodeSerde::PageUp => KeyCode::PageUp,
            KeyCodeSerde::PageDown => KeyCode::PageDown,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Key bindings for every action.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<KeyAction, Vec<Hotkey>>,
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

/// Returns the default bindings.
///
pub fn default_keymap() -> Keymap {
    let mut bindings = HashMap::new();
    bindings.insert(
        KeyAction::Forward,
        vec![
            Hotkey::plain(KeyCode::Down),
            Hotkey::plain(KeyCode::Right),
            Hotkey::plain(KeyCode::Char('j')),
            Hotkey::plain(KeyCode::Char('l')),
            Hotkey::plain(KeyCode::PageDown),
            Hotkey::plain(KeyCode::Char(' ')),
        ],
    );
    bindings.insert(
        KeyAction::Backward,
        vec![
            Hotkey::plain(KeyCode::Up),
            Hotkey::plain(KeyCode::Left),
            Hotkey::plain(KeyCode::Char('k')),
            Hotkey::plain(KeyCode::Char('h')),
            Hotkey::plain(KeyCode::PageUp),
        ],
    );
    bindings.insert(
        KeyAction::First,
        vec![
            Hotkey::plain(KeyCode::Home),
            Hotkey::plain(KeyCode::Char('g')),
        ],
    );
    bindings.insert(
        KeyAction::Last,
        vec![
            Hotkey::plain(KeyCode::End),
            Hotkey::shifted(KeyCode::Char('G')),
        ],
    );
    bindings.insert(KeyAction::NextProject, vec![Hotkey::plain(KeyCode::Tab)]);
    bindings.insert(
        KeyAction::ToggleTheme,
        vec![Hotkey::plain(KeyCode::Char('t'))],
    );
    bindings.insert(KeyAction::ToggleLog, vec![Hotkey::plain(KeyCode::Char('d'))]);
    bindings.insert(
        KeyAction::Quit,
        vec![Hotkey::plain(KeyCode::Char('q')), Hotkey::plain(KeyCode::Esc)],
    );
    Keymap { bindings }
}

impl Keymap {
    /// Replace the bindings of every action present in `overrides`.
    ///
    pub fn with_overrides(mut self, overrides: HashMap<KeyAction, Vec<Hotkey>>) -> Self {
        for (action, hotkeys) in overrides {
            self.bindings.insert(action, hotkeys);
        }
        self
    }

    pub fn bindings(&self, action: KeyAction) -> &[Hotkey] {
        self.bindings
            .get(&action)
            .map(|hotkeys| hotkeys.as_slice())
            .unwrap_or(&[])
    }

    /// Gets the action bound to a key event.
    ///
    pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
        KeyAction::ALL.iter().copied().find(|action| {
            self.bindings(*action)
                .iter()
                .any(|hotkey| matches_hotkey(event, hotkey))
        })
    }

    /// Builds the help line shown in the footer.
    ///
    pub fn footer_text(&self, section_count: usize) -> String {
        let mut parts = Vec::new();
        for (action, description, paired) in [
            (KeyAction::Forward, "navigate", Some(KeyAction::Backward)),
            (KeyAction::First, "first/last", Some(KeyAction::Last)),
        ] {
            if let Some(part) = self.describe(action, description, paired) {
                parts.push(part);
            }
        }
        if section_count > 1 {
            parts.push(format!(" 1-{}: jump", section_count.min(9)));
        }
        for (action, description) in [
            (KeyAction::NextProject, "next project"),
            (KeyAction::ToggleTheme, "theme"),
            (KeyAction::ToggleLog, "log"),
            (KeyAction::Quit, "quit"),
        ] {
            if let Some(part) = self.describe(action, description, None) {
                parts.push(part);
            }
        }
        parts.join(",")
    }

    fn describe(
        &self,
        action: KeyAction,
        description: &str,
        paired: Option<KeyAction>,
    ) -> Option<String> {
        let hotkey = self.bindings(action).first()?;
        let paired_hotkey = paired.and_then(|paired| self.bindings(paired).first());
        Some(match paired_hotkey {
            Some(paired_hotkey) => format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            ),
            None => format!(" {}: {}", format_hotkey_display(hotkey), description),
        })
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
