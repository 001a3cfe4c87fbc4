//! Action handlers: UpdateAction dispatch and background task spawning

use finguard_client::InvoiceClient;
use finguard_core::prelude::*;
use finguard_core::UploadSelection;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &InvoiceClient) {
    match action {
        UpdateAction::UploadInvoice(selection) => {
            spawn_upload(client.clone(), selection, msg_tx);
        }
    }
}

/// Upload one invoice and report the outcome on the message channel.
///
/// There is no cancellation: if a newer upload starts first, whichever
/// response settles last decides what is displayed.
pub fn spawn_upload(
    client: InvoiceClient,
    selection: UploadSelection,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = match client.process_invoice(&selection).await {
            Ok(result) => Message::AnalysisCompleted(result),
            Err(e) => Message::AnalysisFailed {
                message: e.to_string(),
            },
        };

        if msg_tx.send(message).await.is_err() {
            warn!(
                "Message channel closed before the result for {} was delivered",
                selection.file_name
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use finguard_client::test_utils::{refused_origin, spawn_stub_backend, success_body};
    use std::fs;
    use tempfile::TempDir;

    fn invoice(dir: &TempDir) -> UploadSelection {
        let path = dir.path().join("invoice.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();
        UploadSelection::from_path(path).unwrap()
    }

    #[tokio::test]
    async fn test_upload_reports_completion() {
        let dir = TempDir::new().unwrap();
        let stub = spawn_stub_backend(200, success_body()).await;
        let client = InvoiceClient::new(&stub.origin, None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        spawn_upload(client, invoice(&dir), tx).await.unwrap();

        match rx.recv().await {
            Some(Message::AnalysisCompleted(result)) => {
                assert_eq!(result.invoice().unwrap().vendor(), "Acme Supplies");
            }
            other => panic!("expected AnalysisCompleted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_reports_failure_text() {
        let dir = TempDir::new().unwrap();
        let origin = refused_origin().await;
        let client = InvoiceClient::new(&origin, None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        spawn_upload(client, invoice(&dir), tx).await.unwrap();

        match rx.recv().await {
            Some(Message::AnalysisFailed { message }) => {
                assert!(message.starts_with("Could not connect to the server at"));
            }
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }
}
