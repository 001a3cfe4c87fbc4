//! A successful analysis: the two display subtrees of the backend payload.

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::invoice::InvoiceRecord;
use crate::json::{is_truthy, value_to_text, ShapeError};
use crate::risk::RiskAssessment;

/// Payload of a completed analysis.
///
/// The invoice and risk subtrees are kept as raw JSON so that each view can
/// interpret (and fail on) its own subtree independently of the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub invoice_data: Value,
    pub risk_assessment: Value,

    /// Audit hash the backend records for the analysis, when it returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_hash: Option<String>,

    /// When the response arrived.
    pub received_at: DateTime<Local>,
}

impl AnalysisResult {
    /// Build from the `data` object of a success envelope.
    ///
    /// Returns `None` when `invoice_data` is absent or falsy.
    pub fn from_payload(data: &Value) -> Option<Self> {
        let invoice_data = data.get("invoice_data").filter(|v| is_truthy(v))?.clone();
        let risk_assessment = data.get("risk_assessment").cloned().unwrap_or(Value::Null);
        let action_hash = data.get("action_hash").and_then(value_to_text);

        Some(Self {
            invoice_data,
            risk_assessment,
            action_hash,
            received_at: Local::now(),
        })
    }

    pub fn invoice(&self) -> Result<InvoiceRecord, ShapeError> {
        InvoiceRecord::from_value(&self.invoice_data)
    }

    pub fn risk(&self) -> Result<RiskAssessment, ShapeError> {
        RiskAssessment::from_value(&self.risk_assessment)
    }
}
