//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the handler layer (and its tests) never depend on crossterm.

/// Keyboard input as seen by the handler layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key, including path separators and spaces
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// Keys that only move the results viewport.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            InputKey::Up
                | InputKey::Down
                | InputKey::Home
                | InputKey::End
                | InputKey::PageUp
                | InputKey::PageDown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(InputKey::PageDown.is_navigation());
        assert!(InputKey::Home.is_navigation());
        assert!(!InputKey::Enter.is_navigation());
        assert!(!InputKey::Char('j').is_navigation());
    }
}
