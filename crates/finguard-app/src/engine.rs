//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel and the backend client, so both
//! runners drive the same update loop.

use std::path::PathBuf;

use finguard_client::{InvoiceClient, UploadError};
use finguard_core::prelude::*;
use finguard_core::UploadSelection;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for FinGuard.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, upload tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    client: InvoiceClient,
}

impl Engine {
    /// Create an engine for the configured backend.
    ///
    /// Must be called inside a tokio runtime (spawns the signal handler).
    /// An unusable backend origin is fatal.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = InvoiceClient::new(&settings.backend.origin, settings.backend.timeout())
            .map_err(|e| match e {
                UploadError::InvalidOrigin(origin) => Error::invalid_origin(origin),
                other => Error::config(other.to_string()),
            })?;

        info!(
            "Backend endpoint: {} (timeout: {})",
            client.endpoint(),
            settings
                .backend
                .timeout()
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "none".to_string())
        );

        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            client,
        })
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Select a file given on the command line and start uploading it.
    ///
    /// A rejected file leaves the request untouched and shows the reason in
    /// the upload control.
    pub fn select_initial_file(&mut self, path: PathBuf) -> Result<()> {
        match UploadSelection::from_path(path) {
            Ok(selection) => {
                self.process_message(Message::FileSelected(selection));
                Ok(())
            }
            Err(e) => {
                warn!("Initial file rejected: {}", e);
                self.state.upload.hint = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendSettings;
    use crate::state::RequestState;
    use finguard_client::test_utils::{spawn_stub_backend, success_body};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn settings_for(origin: &str) -> Settings {
        Settings {
            backend: BackendSettings {
                origin: origin.to_string(),
                timeout_secs: Some(5),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_engine_rejects_invalid_origin() {
        let err = Engine::new(settings_for("::not a url::")).err().unwrap();
        assert!(matches!(err, Error::InvalidOrigin { .. }));
    }

    #[tokio::test]
    async fn test_quit_message() {
        let mut engine = Engine::new(Settings::default()).unwrap();
        assert!(!engine.should_quit());
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_drain_pending_messages_empty() {
        let mut engine = Engine::new(Settings::default()).unwrap();
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_initial_file_rejected_sets_hint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let mut engine = Engine::new(Settings::default()).unwrap();
        assert!(engine.select_initial_file(path).is_err());
        assert!(matches!(engine.state.request, RequestState::Idle));
        assert!(engine.state.upload.hint.is_some());
    }

    #[tokio::test]
    async fn test_full_upload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invoice.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();
        let stub = spawn_stub_backend(200, success_body()).await;

        let mut engine = Engine::new(settings_for(&stub.origin)).unwrap();
        engine.select_initial_file(path).unwrap();
        assert!(engine.state.request.is_loading());

        let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
            .await
            .unwrap()
            .unwrap();
        engine.process_message(msg);

        let result = engine.state.request.result().unwrap();
        assert_eq!(result.risk().unwrap().level_label(), "MEDIUM");
    }
}
