//! finguard-tui - Terminal UI for FinGuard
//!
//! Creates an [`finguard_app::Engine`] and adds terminal rendering, event
//! polling and the widgets for the upload control, analysis results and
//! risk assessment.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
