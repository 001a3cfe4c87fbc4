//! Keybinding hints along the bottom row.

use finguard_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.ui_mode == UiMode::ConfirmQuit {
            return &[("y", "quit"), ("n", "keep waiting")];
        }
        if self.state.upload_disabled() {
            return &[("↑↓", "scroll"), ("Esc", "quit"), ("Ctrl+C", "force quit")];
        }
        if self.state.upload.drag_active() {
            return &[
                ("Enter", "upload"),
                ("Ctrl+U", "clear"),
                ("Esc", "cancel"),
                ("↑↓", "scroll"),
            ];
        }
        &[("↑↓/PgUp/PgDn", "scroll"), ("Esc", "quit")]
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.bindings().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
