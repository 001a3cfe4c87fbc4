//! Risk assessment returned alongside the invoice record.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::json::{
    kind_of, lenient_list, opt_number, opt_text, strict_list, value_to_text, ShapeError,
};

/// Risk level assumed when the backend does not provide one.
pub const DEFAULT_RISK_LEVEL: &str = "low";

/// Three-way severity used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    High,
    Medium,
    #[default]
    Low,
}

impl RiskSeverity {
    /// Case-insensitive mapping. Unrecognised levels fall back to `Low`.
    pub fn from_level(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "high" => RiskSeverity::High,
            "medium" => RiskSeverity::Medium,
            _ => RiskSeverity::Low,
        }
    }
}

/// The backend's verdict on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RiskAssessment {
    #[serde(default, deserialize_with = "opt_text")]
    pub risk_level: Option<String>,

    #[serde(default, deserialize_with = "opt_number")]
    pub confidence_score: Option<f64>,

    #[serde(default, deserialize_with = "strict_list")]
    pub findings: Vec<Finding>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub unusual_items: Vec<UnusualItem>,
}

impl RiskAssessment {
    /// Interpret the raw `risk_assessment` subtree.
    ///
    /// A missing or non-object assessment renders as the default (low risk,
    /// zero confidence, no findings). Malformed fields inside an object are
    /// errors.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value.clone())?),
            _ => Ok(Self::default()),
        }
    }

    /// Raw level text, defaulting to `low`.
    pub fn level(&self) -> &str {
        self.risk_level.as_deref().unwrap_or(DEFAULT_RISK_LEVEL)
    }

    /// Upper-cased level for chips and badges.
    pub fn level_label(&self) -> String {
        self.level().to_uppercase()
    }

    pub fn severity(&self) -> RiskSeverity {
        RiskSeverity::from_level(self.level())
    }

    pub fn confidence(&self) -> f64 {
        self.confidence_score.unwrap_or(0.0)
    }

    /// Confidence as a percentage with one decimal, e.g. `87.5%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence() * 100.0)
    }
}

/// One reported anomaly or observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Finding {
    Text(String),
    Detailed {
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl Finding {
    pub fn description(&self) -> &str {
        match self {
            Finding::Text(text) => text,
            Finding::Detailed { description, .. } => description,
        }
    }

    /// Details exist only for the structured form.
    pub fn details(&self) -> Option<&str> {
        match self {
            Finding::Text(_) => None,
            Finding::Detailed { details, .. } => details.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for Finding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(text) => Ok(Finding::Text(text)),
            Value::Number(_) | Value::Bool(_) => Ok(Finding::Text(value.to_string())),
            Value::Object(ref map) => {
                let text = |key: &str| map.get(key).and_then(value_to_text);
                Ok(Finding::Detailed {
                    description: text("description").unwrap_or_default(),
                    details: text("details"),
                })
            }
            other => Err(D::Error::custom(format!(
                "finding must be text or an object, found {}",
                kind_of(&other)
            ))),
        }
    }
}

/// A line item the backend flagged as unusual.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UnusualItem {
    #[serde(default, deserialize_with = "opt_text")]
    pub item: Option<String>,

    #[serde(default, deserialize_with = "opt_number")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "opt_text")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_is_case_insensitive() {
        assert_eq!(RiskSeverity::from_level("HIGH"), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_level("Medium"), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_level("low"), RiskSeverity::Low);
    }

    #[test]
    fn test_unknown_level_falls_back_to_low() {
        let assessment = RiskAssessment::from_value(&json!({ "risk_level": "critical" })).unwrap();
        assert_eq!(assessment.severity(), RiskSeverity::Low);
        assert_eq!(assessment.level_label(), "CRITICAL");
    }

    #[test]
    fn test_defaults_when_missing() {
        let assessment = RiskAssessment::from_value(&Value::Null).unwrap();
        assert_eq!(assessment.level(), "low");
        assert_eq!(assessment.severity(), RiskSeverity::Low);
        assert_eq!(assessment.confidence_percent(), "0.0%");
        assert!(assessment.findings.is_empty());
    }

    #[test]
    fn test_confidence_percent_one_decimal() {
        let assessment =
            RiskAssessment::from_value(&json!({ "confidence_score": 0.875 })).unwrap();
        assert_eq!(assessment.confidence_percent(), "87.5%");

        let assessment = RiskAssessment::from_value(&json!({ "confidence_score": 0.6 })).unwrap();
        assert_eq!(assessment.confidence_percent(), "60.0%");
    }

    #[test]
    fn test_findings_of_both_shapes() {
        let assessment = RiskAssessment::from_value(&json!({
            "risk_level": "medium",
            "findings": [
                "Round number amount",
                { "description": "Executive fee", "details": "Line 3 is a licence fee" },
                { "description": "No details here" }
            ]
        }))
        .unwrap();

        assert_eq!(assessment.findings.len(), 3);
        assert_eq!(assessment.findings[0].description(), "Round number amount");
        assert_eq!(assessment.findings[0].details(), None);
        assert_eq!(assessment.findings[1].description(), "Executive fee");
        assert_eq!(
            assessment.findings[1].details(),
            Some("Line 3 is a licence fee")
        );
        assert_eq!(assessment.findings[2].details(), None);
    }

    #[test]
    fn test_findings_not_a_list_is_an_error() {
        let err = RiskAssessment::from_value(&json!({ "findings": "all good" })).unwrap_err();
        assert!(err.to_string().contains("expected a list"));
    }

    #[test]
    fn test_null_finding_is_an_error() {
        let err = RiskAssessment::from_value(&json!({ "findings": [null] })).unwrap_err();
        assert!(err.to_string().contains("finding must be text or an object"));
    }

    #[test]
    fn test_unusual_items() {
        let assessment = RiskAssessment::from_value(&json!({
            "unusual_items": [{ "item": "CEO licence", "price": 90000, "reason": "Unusually high" }]
        }))
        .unwrap();
        assert_eq!(assessment.unusual_items.len(), 1);
        assert_eq!(assessment.unusual_items[0].item.as_deref(), Some("CEO licence"));
        assert_eq!(assessment.unusual_items[0].price, Some(90000.0));
    }
}
