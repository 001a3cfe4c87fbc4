//! HTTP client for the invoice analysis backend

use std::time::Duration;

use finguard_core::{AnalysisResult, UploadSelection};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::UploadError;
use crate::response::interpret_response;

/// Origin used when no backend is configured.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5001";

/// Path of the analysis endpoint, relative to the origin.
pub const PROCESS_INVOICE_PATH: &str = "/api/process-invoice";

/// Multipart field name that carries the file.
pub const INVOICE_FIELD: &str = "invoice";

/// Uploads invoices to `POST {origin}/api/process-invoice`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct InvoiceClient {
    http: reqwest::Client,
    origin: String,
    endpoint: Url,
}

impl InvoiceClient {
    /// Build a client for `origin`. Without a timeout a request waits for
    /// as long as the backend takes.
    pub fn new(origin: &str, timeout: Option<Duration>) -> Result<Self, UploadError> {
        let origin = origin.trim().trim_end_matches('/').to_string();
        let base =
            Url::parse(&origin).map_err(|e| UploadError::InvalidOrigin(format!("{origin} ({e})")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(UploadError::InvalidOrigin(origin));
        }
        let endpoint = base
            .join(PROCESS_INVOICE_PATH)
            .map_err(|e| UploadError::InvalidOrigin(format!("{origin} ({e})")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            origin,
            endpoint,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload one invoice and interpret the backend's verdict.
    ///
    /// Makes exactly one request. Nothing is retried.
    pub async fn process_invoice(
        &self,
        selection: &UploadSelection,
    ) -> Result<AnalysisResult, UploadError> {
        let bytes = tokio::fs::read(&selection.path)
            .await
            .map_err(|source| UploadError::Io {
                path: selection.path.clone(),
                source,
            })?;

        info!(
            file = %selection.file_name,
            size = bytes.len(),
            endpoint = %self.endpoint,
            "Uploading invoice"
        );

        let part = Part::bytes(bytes)
            .file_name(selection.file_name.clone())
            .mime_str(selection.mime.as_str())
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = Form::new().part(INVOICE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Upload request failed: {}", e);
                UploadError::from_transport(e, &self.origin)
            })?;

        let status = response.status().as_u16();
        debug!("Backend responded with status {}", status);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                UploadError::Timeout
            } else {
                UploadError::Decode(e.to_string())
            }
        })?;

        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(_) => info!("Invoice analysis completed"),
            Err(e) => warn!(kind = e.kind(), "Invoice analysis failed: {}", e),
        }
        outcome
    }
}
