#![forbid(unsafe_code)]

//! Keyboard dispatch for tour navigation.
//!
//! # Default Bindings
//!
//! | Key                     | Action            |
//! |-------------------------|-------------------|
//! | `Right`, `Enter`, `l`   | [`TourAction::Next`] |
//! | `Left`, `h`             | [`TourAction::Prev`] |
//! | `Escape`                | [`TourAction::Close`] |
//! | `Home`                  | `GoTo(0)`         |
//! | `End`                   | `GoTo(last)`      |
//!
//! Releases and chorded keys (Ctrl, Alt, Super) never map to an action so the
//! host keeps its own shortcuts while a tour is showing.

use waypoint_core::event::{KeyCode, KeyEvent};

/// High-level tour commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourAction {
    Next,
    Prev,
    /// Dismiss the tour.
    Close,
    /// Abandon the tour from the tooltip's skip button.
    Skip,
    /// Jump to a step; out-of-range indices clamp to the last step.
    GoTo(usize),
}

/// Maps key events to [`TourAction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    enabled: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl KeyBindings {
    /// Bindings that are active when `enabled` is true and inert otherwise.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Bindings that ignore every key.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resolve a key event for a tour with `step_count` steps.
    #[must_use]
    pub fn action(&self, event: &KeyEvent, step_count: usize) -> Option<TourAction> {
        if !self.enabled || !event.is_press() || event.is_chorded() {
            return None;
        }

        match event.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => Some(TourAction::Next),
            KeyCode::Left | KeyCode::Char('h') => Some(TourAction::Prev),
            KeyCode::Escape => Some(TourAction::Close),
            KeyCode::Home => Some(TourAction::GoTo(0)),
            KeyCode::End if step_count > 0 => Some(TourAction::GoTo(step_count - 1)),
            _ => None,
        }
    }
}
