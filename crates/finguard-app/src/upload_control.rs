//! Upload control state: the path input line and its rejection hint.
//!
//! A path arrives either typed (committed with Enter) or dropped onto the
//! terminal, which delivers it as a bracketed paste. Validation lives in
//! [`UploadSelection`]; this type only tracks what the control displays.

use finguard_core::prelude::*;
use finguard_core::UploadSelection;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadControlState {
    /// Path typed so far, or keystrokes of a drop the terminal did not bracket
    pub input: String,

    /// Why the last selection was refused, shown inside the control
    pub hint: Option<String>,
}

impl UploadControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path is pending in the input line.
    pub fn drag_active(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.hint = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.hint = None;
    }

    /// Validate the pending input as a selection.
    ///
    /// On success the input is cleared. On a selection error the input is
    /// kept so the user can correct it, and the hint is set.
    pub fn submit(&mut self) -> Option<UploadSelection> {
        if !self.drag_active() {
            return None;
        }
        let payload = self.input.clone();
        let selection = self.select(&payload);
        if selection.is_some() {
            self.input.clear();
        }
        selection
    }

    /// Validate a dropped payload. The typed input is left untouched.
    pub fn drop_payload(&mut self, payload: &str) -> Option<UploadSelection> {
        self.select(payload)
    }

    fn select(&mut self, payload: &str) -> Option<UploadSelection> {
        match UploadSelection::from_drop(payload) {
            Ok(selection) => {
                debug!("Selected {} ({})", selection.file_name, selection.mime);
                self.hint = None;
                Some(selection)
            }
            Err(e) => {
                if !e.is_selection_error() {
                    warn!("Unexpected selection failure: {}", e);
                }
                info!("Rejected selection: {}", e);
                self.hint = Some(e.to_string());
                None
            }
        }
    }
}
