//! Message types for the application (TEA pattern)

use finguard_core::{AnalysisResult, UploadSelection};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from the terminal. Dropping a file onto most terminal
    /// emulators pastes its path, so this is how drag-and-drop arrives.
    Paste(String),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Request to quit (asks for confirmation while an upload is in flight)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Upload Control Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the path input
    UploadInput(char),
    /// Delete the last character of the path input
    UploadBackspace,
    /// Clear the path input and any rejection hint
    UploadClear,
    /// Commit the typed path (Enter)
    UploadSubmit,

    /// A file passed the upload control's checks
    FileSelected(UploadSelection),

    // ─────────────────────────────────────────────────────────
    // Analysis Messages
    // ─────────────────────────────────────────────────────────
    /// The backend accepted the invoice and returned an analysis
    AnalysisCompleted(AnalysisResult),

    /// The upload failed; `message` is the banner text
    AnalysisFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll results up one line
    ScrollUp,
    /// Scroll results down one line
    ScrollDown,
    /// Scroll to top of results
    ScrollToTop,
    /// Scroll to bottom of results
    ScrollToBottom,
    /// Page up in results
    PageUp,
    /// Page down in results
    PageDown,
}
