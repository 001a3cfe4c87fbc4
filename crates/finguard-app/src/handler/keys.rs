//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode.
///
/// Printable characters always go to the path input, so quitting and
/// clearing use Esc and Ctrl chords.
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_navigation() {
        return scroll_message(key);
    }

    let disabled = state.upload_disabled();
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),

        // Esc clears a pending path first, then quits
        InputKey::Esc if state.upload.drag_active() => Some(Message::UploadClear),
        InputKey::Esc => Some(Message::RequestQuit),

        _ if disabled => None,

        InputKey::CharCtrl('u') => Some(Message::UploadClear),
        InputKey::Enter => Some(Message::UploadSubmit),
        InputKey::Backspace => Some(Message::UploadBackspace),
        InputKey::Char(c) => Some(Message::UploadInput(c)),
        _ => None,
    }
}

fn scroll_message(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}
