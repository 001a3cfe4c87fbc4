//! Upload failures
//!
//! `Display` of every variant is the text shown in the inline error banner.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    // ─────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Could not connect to the server at {origin}. Please make sure the backend server is running."
    )]
    Unreachable { origin: String },

    #[error("Request timed out. The server took too long to respond.")]
    Timeout,

    #[error("{0}")]
    Transport(String),

    // ─────────────────────────────────────────────────────────────
    // Response
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("{message}")]
    Rejected { message: String },

    #[error("Invalid response: missing invoice data")]
    MissingInvoiceData,

    // ─────────────────────────────────────────────────────────────
    // Local
    // ─────────────────────────────────────────────────────────────
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid backend origin: {0}")]
    InvalidOrigin(String),
}

impl UploadError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Classify a reqwest failure that happened before a body was decoded.
    pub fn from_transport(err: reqwest::Error, origin: &str) -> Self {
        if err.is_timeout() {
            UploadError::Timeout
        } else if err.is_connect() {
            UploadError::Unreachable {
                origin: origin.to_string(),
            }
        } else {
            UploadError::Transport(err.to_string())
        }
    }

    /// Short machine-readable tag, used in headless output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::Unreachable { .. } => "unreachable",
            UploadError::Timeout => "timeout",
            UploadError::Transport(_) => "transport",
            UploadError::Decode(_) => "decode",
            UploadError::Rejected { .. } => "rejected",
            UploadError::MissingInvoiceData => "missing_invoice_data",
            UploadError::Io { .. } => "io",
            UploadError::InvalidOrigin(_) => "invalid_origin",
        }
    }
}
