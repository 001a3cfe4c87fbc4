//! Upload control and analysis outcome handlers

use finguard_core::prelude::*;
use finguard_core::{AnalysisResult, UploadSelection};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Input is ignored while a request is in flight or a dialog is open.
fn accepts_input(state: &AppState) -> bool {
    !state.upload_disabled() && state.ui_mode == UiMode::Normal
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if accepts_input(state) {
        state.upload.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if accepts_input(state) {
        state.upload.backspace();
    }
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.upload.clear();
    UpdateResult::none()
}

/// Enter commits the typed path.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !accepts_input(state) {
        return UpdateResult::none();
    }
    match state.upload.submit() {
        Some(selection) => UpdateResult::message(Message::FileSelected(selection)),
        None => UpdateResult::none(),
    }
}

/// A bracketed paste is treated as a file drop.
pub fn handle_paste(state: &mut AppState, payload: &str) -> UpdateResult {
    if !accepts_input(state) {
        debug!("Ignoring drop while the upload control is disabled");
        return UpdateResult::none();
    }
    match state.upload.drop_payload(payload) {
        Some(selection) => UpdateResult::message(Message::FileSelected(selection)),
        None => UpdateResult::none(),
    }
}

/// Move to Loading and ask the event loop to run the upload.
pub fn handle_file_selected(state: &mut AppState, selection: UploadSelection) -> UpdateResult {
    info!(
        "Uploading {} ({}) to {}",
        selection.file_name,
        selection.mime,
        state.backend_origin()
    );
    state.begin_upload(&selection);
    UpdateResult::action(UpdateAction::UploadInvoice(selection))
}

pub fn handle_analysis_completed(state: &mut AppState, result: AnalysisResult) -> UpdateResult {
    if !state.request.is_loading() {
        debug!("Analysis arrived while {}; it replaces the current view", state.request.label());
    }
    state.complete_upload(result);
    UpdateResult::none()
}

pub fn handle_analysis_failed(state: &mut AppState, message: String) -> UpdateResult {
    if !state.request.is_loading() {
        debug!("Failure arrived while {}; it replaces the current view", state.request.label());
    }
    state.fail_upload(message);
    UpdateResult::none()
}
