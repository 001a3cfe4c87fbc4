//! # finguard-client - Invoice Analysis Backend Client
//!
//! Uploads one invoice file per request to the analysis backend and turns its
//! response envelope into an [`AnalysisResult`] or an [`UploadError`].
//!
//! Depends on [`finguard_core`] for domain types.
//!
//! ## Public API
//!
//! - [`InvoiceClient`] - `POST {origin}/api/process-invoice` with a multipart `invoice` part
//! - [`interpret_response()`] - Pure status + body interpretation
//! - [`UploadError`] - Every way an upload can fail, displayed as banner text
//!
//! [`AnalysisResult`]: finguard_core::AnalysisResult

pub mod client;
pub mod error;
pub mod response;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{InvoiceClient, DEFAULT_ORIGIN, INVOICE_FIELD, PROCESS_INVOICE_PATH};
pub use error::UploadError;
pub use response::{interpret_response, GENERIC_FAILURE};
