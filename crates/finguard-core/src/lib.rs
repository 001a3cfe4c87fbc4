//! # finguard-core - Core Domain Types
//!
//! Foundation crate for FinGuard. Provides the invoice and risk data model,
//! upload file selection, currency formatting, error handling and logging.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Analysis Payload (`analysis`, `invoice`, `risk`)
//! - [`AnalysisResult`] - Raw invoice and risk subtrees of a successful response
//! - [`InvoiceRecord`], [`LineItem`] - Extracted invoice fields
//! - [`RiskAssessment`], [`RiskSeverity`], [`Finding`], [`UnusualItem`]
//! - [`ShapeError`] - A subtree that cannot be displayed
//!
//! ### Upload Selection (`upload`)
//! - [`UploadSelection`] - A validated invoice file
//! - [`InvoiceMime`] - Declared MIME type derived from the extension
//! - [`parse_dropped_paths()`] - Turn a terminal drop/paste payload into paths
//!
//! ### Formatting (`currency`)
//! - [`format_inr()`] - `₹1,23,456.78`
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use finguard_core::prelude::*;
//! ```

pub mod analysis;
pub mod currency;
pub mod error;
pub mod invoice;
pub mod json;
pub mod logging;
pub mod risk;
pub mod upload;

/// Prelude for common imports used throughout all FinGuard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use analysis::AnalysisResult;
pub use currency::{format_inr, format_quantity, CURRENCY_SYMBOL};
pub use error::{Error, Result, ResultExt};
pub use invoice::{InvoiceRecord, LineItem, NOT_AVAILABLE, UNKNOWN_ITEM};
pub use json::{is_truthy, ShapeError};
pub use risk::{Finding, RiskAssessment, RiskSeverity, UnusualItem, DEFAULT_RISK_LEVEL};
pub use upload::{parse_dropped_paths, InvoiceMime, UploadSelection, SUPPORTED_FORMATS_LABEL};
