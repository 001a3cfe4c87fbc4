//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend`, which
//! is fast and deterministic compared to driving a real PTY.

use chrono::{Local, TimeZone};
use finguard_app::AppState;
use finguard_core::AnalysisResult;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use serde_json::{json, Value};

/// Standard test terminal size. Tall enough for the results pane to show
/// a full sample analysis without scrolling.
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 60;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 20;

/// Wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one line
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Invoice subtree used across render tests.
pub fn sample_invoice() -> Value {
    json!({
        "invoice_number": "INV-2025-001",
        "date": "2025-06-13",
        "vendor": "Acme Supplies",
        "total_amount": 123456.78,
        "line_items": [
            { "name": "Consulting", "quantity": 2, "price": 5000.0 },
            { "name": "CEO licence", "quantity": 1, "price": 90000.0 }
        ]
    })
}

/// Risk subtree used across render tests.
pub fn sample_risk() -> Value {
    json!({
        "risk_level": "medium",
        "confidence_score": 0.875,
        "findings": [
            "Round number amount",
            { "description": "Executive fee", "details": "Line 2 is unusually high" }
        ],
        "unusual_items": [
            { "item": "CEO licence", "price": 90000, "reason": "Far above typical licence cost" }
        ]
    })
}

/// Build a result from explicit subtrees with a fixed receipt time.
pub fn analysis_result(invoice: Value, risk: Value) -> AnalysisResult {
    AnalysisResult {
        invoice_data: invoice,
        risk_assessment: risk,
        action_hash: Some("0x5f2c".to_string()),
        received_at: Local
            .with_ymd_and_hms(2025, 6, 13, 14, 3, 22)
            .single()
            .expect("valid timestamp"),
    }
}

pub fn sample_result() -> AnalysisResult {
    analysis_result(sample_invoice(), sample_risk())
}

pub fn create_test_state() -> AppState {
    AppState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area().width, TEST_WIDTH);
        assert_eq!(TestTerminal::compact().area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_buffer_contains_and_find_line() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("\nHello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(1));
        assert!(term.line_contains(1, "World"));
    }
}
