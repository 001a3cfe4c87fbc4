//! Custom widget components

mod boundary;
mod confirm_dialog;
mod error_banner;
mod header;
mod invoice_results;
mod key_hints;
mod loading;
pub mod modal_overlay;
mod risk_assessment;
mod text;
mod upload_panel;

pub use boundary::{RenderBoundary, FALLBACK_PREFIX};
pub use confirm_dialog::ConfirmQuitDialog;
pub use error_banner::ErrorBanner;
pub use header::MainHeader;
pub use invoice_results::{metadata_line, InvoiceResults};
pub use key_hints::KeyHints;
pub use loading::{LoadingIndicator, LOADING_MESSAGE};
pub use risk_assessment::RiskAssessmentView;
pub use upload_panel::UploadPanel;
