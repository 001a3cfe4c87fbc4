//! Structured invoice record as returned by the analysis backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{opt_number, opt_text, record_list, ShapeError};

/// Placeholder shown for any missing text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for a line item without a description.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Extracted invoice fields. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InvoiceRecord {
    #[serde(default, deserialize_with = "opt_text")]
    pub invoice_number: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub vendor: Option<String>,

    #[serde(default, deserialize_with = "opt_number")]
    pub total_amount: Option<f64>,

    #[serde(default, deserialize_with = "record_list")]
    pub line_items: Vec<LineItem>,
}

impl InvoiceRecord {
    /// Interpret the raw `invoice_data` subtree.
    ///
    /// A null payload is reported as [`ShapeError::Missing`]. Any other
    /// non-object value carries no fields and yields an empty record.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::Null => Err(ShapeError::Missing),
            Value::Object(_) => Ok(serde_json::from_value(value.clone())?),
            _ => Ok(Self::default()),
        }
    }

    pub fn invoice_number(&self) -> &str {
        self.invoice_number.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn vendor(&self) -> &str {
        self.vendor.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Declared grand total. Not reconciled against the line items.
    pub fn total_amount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }
}

/// One invoice line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,

    /// Some extraction prompts emit `description` instead of `name`
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "opt_number")]
    pub quantity: Option<f64>,

    /// Unit price
    #[serde(default, deserialize_with = "opt_number")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "opt_number", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl LineItem {
    pub fn description(&self) -> &str {
        self.name
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or(UNKNOWN_ITEM)
    }

    /// Quantity, defaulting to 1 when absent or zero.
    pub fn quantity(&self) -> f64 {
        self.quantity.filter(|q| *q != 0.0).unwrap_or(1.0)
    }

    /// Unit price, defaulting to 0 when absent.
    pub fn unit_price(&self) -> f64 {
        self.price.or(self.unit_price).unwrap_or(0.0)
    }

    /// Extended amount: unit price × quantity.
    pub fn amount(&self) -> f64 {
        self.unit_price() * self.quantity()
    }
}
