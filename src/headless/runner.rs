//! Headless mode runner - one upload, no TUI

use std::io::{self, Write};
use std::path::PathBuf;

use finguard_app::config::Settings;
use finguard_app::{Engine, Message, RequestState};
use finguard_core::prelude::*;
use finguard_core::UploadSelection;

use super::HeadlessEvent;

/// Upload `file` and report the outcome on stdout.
///
/// Returns whether the analysis succeeded.
pub async fn run_headless(settings: Settings, file: PathBuf) -> Result<bool> {
    info!("═══════════════════════════════════════════════════════");
    info!("FinGuard starting in HEADLESS mode");
    info!("File: {}", file.display());
    info!("═══════════════════════════════════════════════════════");

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), true).emit();
            return Err(e);
        }
    };

    let succeeded = headless_upload(&mut engine, file, &mut io::stdout()).await;

    info!("FinGuard headless mode exiting (success: {})", succeeded);
    Ok(succeeded)
}

/// Drive a single upload through the engine, writing events to `out`.
async fn headless_upload(engine: &mut Engine, file: PathBuf, out: &mut impl Write) -> bool {
    let selection = match UploadSelection::from_path(file) {
        Ok(selection) => selection,
        Err(e) => {
            warn!("File rejected: {}", e);
            HeadlessEvent::error(e.to_string(), true).write_to(out);
            return false;
        }
    };

    HeadlessEvent::upload_started(
        &selection.file_name,
        selection.mime.as_str(),
        engine.state.backend_origin(),
    )
    .write_to(out);
    engine.process_message(Message::FileSelected(selection));

    while let Some(msg) = engine.msg_rx.recv().await {
        let interrupted = matches!(msg, Message::Quit);
        engine.process_message(msg);

        match &engine.state.request {
            RequestState::Succeeded(result) => {
                HeadlessEvent::analysis_completed(result).write_to(out);
                return true;
            }
            RequestState::Failed { message } => {
                HeadlessEvent::analysis_failed(message.as_str()).write_to(out);
                return false;
            }
            RequestState::Idle | RequestState::Loading { .. } => {}
        }

        if interrupted {
            info!("Interrupted before the analysis finished");
            HeadlessEvent::error("Interrupted before the analysis finished", true).write_to(out);
            return false;
        }
    }

    error!("Message channel closed");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use finguard_app::config::BackendSettings;
    use finguard_client::test_utils::{refused_origin, spawn_stub_backend, success_body};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn engine_for(origin: &str) -> Engine {
        let settings = Settings {
            backend: BackendSettings {
                origin: origin.to_string(),
                timeout_secs: Some(5),
            },
            ..Default::default()
        };
        Engine::new(settings).unwrap()
    }

    fn invoice_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"%PDF-1.4 test").unwrap();
        path
    }

    fn events(out: Vec<u8>) -> Vec<Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_successful_upload_events() {
        let dir = TempDir::new().unwrap();
        let file = invoice_file(&dir, "invoice.pdf");
        let backend = spawn_stub_backend(200, success_body()).await;
        let mut engine = engine_for(&backend.origin);

        let mut out = Vec::new();
        assert!(headless_upload(&mut engine, file, &mut out).await);

        let events = events(out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "upload_started");
        assert_eq!(events[0]["file"], "invoice.pdf");
        assert_eq!(events[0]["backend"], backend.origin.as_str());
        assert_eq!(events[1]["event"], "analysis_completed");
        assert_eq!(events[1]["risk_level"], "medium");
        assert_eq!(events[1]["invoice"]["vendor"], "Acme Supplies");

        let request = backend.request().await;
        assert!(request.starts_with("POST /api/process-invoice"));
    }

    #[tokio::test]
    async fn test_rejected_by_backend() {
        let dir = TempDir::new().unwrap();
        let file = invoice_file(&dir, "scan.png");
        let body = json!({ "success": false, "error": "Unreadable scan" }).to_string();
        let backend = spawn_stub_backend(200, body).await;
        let mut engine = engine_for(&backend.origin);

        let mut out = Vec::new();
        assert!(!headless_upload(&mut engine, file, &mut out).await);

        let events = events(out);
        assert_eq!(events[1]["event"], "analysis_failed");
        assert_eq!(events[1]["message"], "Unreadable scan");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let dir = TempDir::new().unwrap();
        let file = invoice_file(&dir, "invoice.pdf");
        let mut engine = engine_for(&refused_origin().await);

        let mut out = Vec::new();
        assert!(!headless_upload(&mut engine, file, &mut out).await);

        let events = events(out);
        assert_eq!(events[1]["event"], "analysis_failed");
        assert!(events[1]["message"]
            .as_str()
            .unwrap()
            .starts_with("Could not connect to the server at"));
    }

    #[tokio::test]
    async fn test_unsupported_file_never_uploads() {
        let dir = TempDir::new().unwrap();
        let file = invoice_file(&dir, "notes.txt");
        let mut engine = engine_for("http://127.0.0.1:5001");

        let mut out = Vec::new();
        assert!(!headless_upload(&mut engine, file, &mut out).await);

        let events = events(out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "error");
        assert!(events[0]["message"]
            .as_str()
            .unwrap()
            .contains("Unsupported file type"));
        assert!(matches!(engine.state.request, RequestState::Idle));
    }
}
