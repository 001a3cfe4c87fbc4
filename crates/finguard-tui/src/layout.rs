//! Screen layout definitions for the TUI
//!
//! Header and upload control are fixed height. The status strip (spinner or
//! error banner) only takes space while it has something to show, and the
//! results pane gets the rest.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title + subtitle + tagline + border
pub const HEADER_HEIGHT: u16 = 5;

/// Upload control: border + prompt + input + formats + hint + border
pub const UPLOAD_HEIGHT: u16 = 6;

/// Loading indicator: border + spinner line + border
pub const STATUS_HEIGHT: u16 = 3;

/// Cap for a wrapped error banner, so the results pane keeps its rows
pub const MAX_STATUS_HEIGHT: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    pub upload: Rect,

    /// Zero height when there is no status to show
    pub status: Rect,

    /// Results and risk assessment
    pub content: Rect,

    /// Keybinding hints
    pub footer: Rect,
}

/// Create the main screen layout
///
/// `status_height` is 0 when there is nothing to show.
pub fn create(area: Rect, status_height: u16) -> ScreenAreas {
    let status_height = status_height.min(MAX_STATUS_HEIGHT);

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(UPLOAD_HEIGHT),
        Constraint::Length(status_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        upload: chunks[1],
        status: chunks[2],
        content: chunks[3],
        footer: chunks[4],
    }
}
