//! Interpretation of the backend's response envelope.
//!
//! ```json
//! { "success": true, "data": { "invoice_data": {..}, "risk_assessment": {..} } }
//! { "success": false, "error": "..." }
//! ```

use finguard_core::json::{is_truthy, value_to_text};
use finguard_core::AnalysisResult;
use serde_json::Value;

use crate::error::UploadError;

/// Fallback banner text when a failure carries no `error` field.
pub const GENERIC_FAILURE: &str = "Failed to process invoice";

/// Turn a status code and raw body into an outcome.
///
/// The body is parsed before the status is looked at, so a non-JSON error
/// page reports as a decode failure whatever its status.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<AnalysisResult, UploadError> {
    let envelope: Value =
        serde_json::from_slice(body).map_err(|e| UploadError::Decode(e.to_string()))?;

    let success = envelope.get("success").is_some_and(is_truthy);
    if status == 200 && success {
        let data = envelope.get("data").unwrap_or(&Value::Null);
        return AnalysisResult::from_payload(data).ok_or(UploadError::MissingInvoiceData);
    }

    let message = envelope
        .get("error")
        .and_then(value_to_text)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    Err(UploadError::rejected(message))
}
