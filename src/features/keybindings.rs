//! Customizable keyboard shortcuts
//!
//! Keys are bound to [`Action`]s; the app translates actions into carousel
//! inputs or display changes.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

use crate::i18n::Key as TextKey;

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Slider
    PreviousSlide,
    NextSlide,
    ToggleAutoplay,
    FirstSlide,
    LastSlide,

    // Display
    ToggleDarkMode,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[
            Action::PreviousSlide,
            Action::NextSlide,
            Action::ToggleAutoplay,
            Action::FirstSlide,
            Action::LastSlide,
            Action::ToggleDarkMode,
        ]
    }

    /// Translation key naming the action
    pub fn i18n_key(&self) -> TextKey {
        match self {
            Action::PreviousSlide => TextKey::SliderPrevious,
            Action::NextSlide => TextKey::SliderNext,
            Action::ToggleAutoplay => TextKey::ActionToggleAutoplay,
            Action::FirstSlide => TextKey::ActionFirstSlide,
            Action::LastSlide => TextKey::ActionLastSlide,
            Action::ToggleDarkMode => TextKey::ToggleTheme,
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add Shift modifier
    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match exactly
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// A printable character, compared case-insensitively
    Char(char),

    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Space,
    Enter,
    Escape,

    MediaPlayPause,
    MediaNext,
    MediaPrev,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        use iced::keyboard::key::Named;

        match (self, key) {
            (KeyCode::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars();
                match (chars.next(), chars.next()) {
                    (Some(actual), None) => actual.to_lowercase().eq(expected.to_lowercase()),
                    _ => false,
                }
            }
            (_, Key::Named(named)) => matches!(
                (self, named),
                (KeyCode::Left, Named::ArrowLeft)
                    | (KeyCode::Right, Named::ArrowRight)
                    | (KeyCode::Up, Named::ArrowUp)
                    | (KeyCode::Down, Named::ArrowDown)
                    | (KeyCode::Home, Named::Home)
                    | (KeyCode::End, Named::End)
                    | (KeyCode::PageUp, Named::PageUp)
                    | (KeyCode::PageDown, Named::PageDown)
                    | (KeyCode::Space, Named::Space)
                    | (KeyCode::Enter, Named::Enter)
                    | (KeyCode::Escape, Named::Escape)
                    | (KeyCode::MediaPlayPause, Named::MediaPlayPause)
                    | (KeyCode::MediaNext, Named::MediaTrackNext)
                    | (KeyCode::MediaPrev, Named::MediaTrackPrevious)
            ),
            _ => false,
        }
    }

    /// Get display name for the key
    pub fn display(&self) -> String {
        let name = match self {
            KeyCode::Char(c) => return c.to_uppercase().collect(),
            KeyCode::Left => "←",
            KeyCode::Right => "→",
            KeyCode::Up => "↑",
            KeyCode::Down => "↓",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Space => "Space",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Esc",
            KeyCode::MediaPlayPause => "Media Play",
            KeyCode::MediaNext => "Media Next",
            KeyCode::MediaPrev => "Media Prev",
        };
        name.to_string()
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::PreviousSlide,
            vec![
                KeyBinding::new(KeyCode::Left),
                KeyBinding::new(KeyCode::MediaPrev),
            ],
        );
        bindings.insert(
            Action::NextSlide,
            vec![
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::MediaNext),
            ],
        );
        bindings.insert(
            Action::ToggleAutoplay,
            vec![
                KeyBinding::new(KeyCode::Space),
                KeyBinding::new(KeyCode::MediaPlayPause),
            ],
        );
        bindings.insert(Action::FirstSlide, vec![KeyBinding::new(KeyCode::Home)]);
        bindings.insert(Action::LastSlide, vec![KeyBinding::new(KeyCode::End)]);
        bindings.insert(
            Action::ToggleDarkMode,
            vec![KeyBinding::new(KeyCode::Char('d')).ctrl()],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Get the keybindings for an action
    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    /// Replace the keybindings for an action
    #[cfg(test)]
    pub fn set(&mut self, action: Action, bindings: Vec<KeyBinding>) {
        self.bindings.insert(action, bindings);
    }

    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings.iter().find_map(|(action, bindings)| {
            bindings
                .iter()
                .any(|binding| binding.matches(key, modifiers))
                .then_some(*action)
        })
    }

    /// Get display string for an action's first keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}
