//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, scroll, upload, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(payload) => upload::handle_paste(state, &payload),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload Control Messages
        // ─────────────────────────────────────────────────────────
        Message::UploadInput(c) => upload::handle_input(state, c),
        Message::UploadBackspace => upload::handle_backspace(state),
        Message::UploadClear => upload::handle_clear(state),
        Message::UploadSubmit => upload::handle_submit(state),
        Message::FileSelected(selection) => upload::handle_file_selected(state, selection),

        // ─────────────────────────────────────────────────────────
        // Analysis Messages
        // ─────────────────────────────────────────────────────────
        Message::AnalysisCompleted(result) => upload::handle_analysis_completed(state, result),
        Message::AnalysisFailed { message } => upload::handle_analysis_failed(state, message),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}
