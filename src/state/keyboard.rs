//! Keyboard Events - Key, modifiers and press/repeat/release state
//!
//! Key names follow the DOM `KeyboardEvent.key` convention ("Escape",
//! "Enter", "ArrowUp", single characters for printable keys) so handlers
//! compare against the same strings a browser would report.

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True if no modifier is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Key event state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// DOM-style key name (e.g., "a", "Enter", "Escape")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Plain key press
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    pub fn with_state(mut self, state: KeyState) -> Self {
        self.state = state;
        self
    }

    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Press or auto-repeat of the named key, any modifiers.
    pub fn is_key_down(&self, key: &str) -> bool {
        self.state != KeyState::Release && self.key == key
    }
}

// =============================================================================
// TESTS
// =============================================================================
