#![forbid(unsafe_code)]

//! Keyboard input types consumed by tour navigation.
//!
//! Hosts translate their native key events into [`KeyEvent`] before handing
//! them to the tour controller. Only the keys a tour cares about are modelled;
//! everything else maps to [`KeyCode::Char`] or is dropped by the host.

use bitflags::bitflags;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl, Alt or Super is held. Tours leave chorded keys to the host.
    #[must_use]
    pub const fn is_chorded(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::SUPER))
    }

    /// Check if the event is a press or auto-repeat (not a release).
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (auto-repeat).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_defaults() {
        let event = KeyEvent::new(KeyCode::Enter);
        assert_eq!(event.modifiers, Modifiers::NONE);
        assert_eq!(event.kind, KeyEventKind::Press);
        assert!(event.is_press());
        assert!(!event.is_chorded());
    }

    #[test]
    fn chorded_ignores_shift() {
        let shifted = KeyEvent::new(KeyCode::Char('L')).with_modifiers(Modifiers::SHIFT);
        assert!(!shifted.is_chorded());
        let ctrl = KeyEvent::new(KeyCode::Char('l')).with_modifiers(Modifiers::CTRL);
        assert!(ctrl.is_chorded());
        let alt_shift =
            KeyEvent::new(KeyCode::Right).with_modifiers(Modifiers::ALT | Modifiers::SHIFT);
        assert!(alt_shift.is_chorded());
        let super_key = KeyEvent::new(KeyCode::Enter).with_modifiers(Modifiers::SUPER);
        assert!(super_key.is_chorded());
    }

    #[test]
    fn release_is_not_press() {
        let event = KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Release);
        assert!(!event.is_press());
        let repeat = KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Repeat);
        assert!(repeat.is_press());
    }

    #[test]
    fn is_char_matches_exact() {
        let event = KeyEvent::new(KeyCode::Char('h'));
        assert!(event.is_char('h'));
        assert!(!event.is_char('l'));
        assert!(!KeyEvent::new(KeyCode::Home).is_char('h'));
    }
}
