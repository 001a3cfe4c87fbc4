//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `upload`: Upload control and analysis outcome handlers
//! - `scroll`: Results pane scroll handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;
pub(crate) mod upload;


use finguard_core::UploadSelection;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Upload the selected invoice in a background task.
    ///
    /// The task reports back with `Message::AnalysisCompleted` or
    /// `Message::AnalysisFailed`.
    UploadInvoice(UploadSelection),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
