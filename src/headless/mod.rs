//! Headless mode - NDJSON event output instead of the TUI
//!
//! Uploads a single invoice and reports progress on stdout, one JSON object
//! per line. Each event has an `event` field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"upload_started","file":"invoice.pdf","mime":"application/pdf","backend":"http://127.0.0.1:5001","timestamp":1749803000000}
//! {"event":"analysis_completed","risk_level":"medium","confidence":0.82,"invoice":{...},"risk_assessment":{...},"timestamp":1749803004000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use finguard_core::AnalysisResult;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The file was accepted and the request is in flight
    UploadStarted {
        file: String,
        mime: String,
        backend: String,
        timestamp: i64,
    },

    /// The backend returned an analysis
    AnalysisCompleted {
        /// Risk level as sent, `low` when absent
        risk_level: String,
        confidence: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        action_hash: Option<String>,
        invoice: Value,
        risk_assessment: Value,
        timestamp: i64,
    },

    /// The request failed; `message` is what the TUI banner would show
    AnalysisFailed { message: String, timestamp: i64 },

    /// The run could not start (rejected file, bad configuration)
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line and flush.
    pub fn write_to(&self, out: &mut impl Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn upload_started(file: &str, mime: &str, backend: &str) -> Self {
        Self::UploadStarted {
            file: file.to_string(),
            mime: mime.to_string(),
            backend: backend.to_string(),
            timestamp: Self::now(),
        }
    }

    /// Summarise a result. A risk subtree that does not parse still reports
    /// the raw JSON, with the default level and confidence.
    pub fn analysis_completed(result: &AnalysisResult) -> Self {
        let risk = result.risk().unwrap_or_default();
        Self::AnalysisCompleted {
            risk_level: risk.level().to_string(),
            confidence: risk.confidence(),
            action_hash: result.action_hash.clone(),
            invoice: result.invoice_data.clone(),
            risk_assessment: result.risk_assessment.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::AnalysisFailed {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use serde_json::json;

    fn line(event: &HeadlessEvent) -> Value {
        let mut out = Vec::new();
        event.write_to(&mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_upload_started_shape() {
        let value = line(&HeadlessEvent::upload_started(
            "invoice.pdf",
            "application/pdf",
            "http://127.0.0.1:5001",
        ));
        assert_eq!(value["event"], "upload_started");
        assert_eq!(value["file"], "invoice.pdf");
        assert_eq!(value["mime"], "application/pdf");
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn test_analysis_completed_summary() {
        let result = AnalysisResult {
            invoice_data: json!({ "vendor": "Acme" }),
            risk_assessment: json!({ "risk_level": "HIGH", "confidence_score": 0.9 }),
            action_hash: None,
            received_at: Local::now(),
        };
        let value = line(&HeadlessEvent::analysis_completed(&result));

        assert_eq!(value["event"], "analysis_completed");
        assert_eq!(value["risk_level"], "HIGH");
        assert_eq!(value["confidence"], 0.9);
        assert_eq!(value["invoice"]["vendor"], "Acme");
        assert!(value.get("action_hash").is_none());
    }

    #[test]
    fn test_malformed_risk_still_reports_raw_json() {
        let result = AnalysisResult {
            invoice_data: json!({ "vendor": "Acme" }),
            risk_assessment: json!({ "findings": "all good" }),
            action_hash: Some("0xab".into()),
            received_at: Local::now(),
        };
        let value = line(&HeadlessEvent::analysis_completed(&result));

        assert_eq!(value["risk_level"], "low");
        assert_eq!(value["risk_assessment"]["findings"], "all good");
        assert_eq!(value["action_hash"], "0xab");
    }

    #[test]
    fn test_failure_events() {
        let value = line(&HeadlessEvent::analysis_failed("Unreadable scan"));
        assert_eq!(value["event"], "analysis_failed");
        assert_eq!(value["message"], "Unreadable scan");

        let value = line(&HeadlessEvent::error("Unsupported file type", true));
        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], true);
    }
}
