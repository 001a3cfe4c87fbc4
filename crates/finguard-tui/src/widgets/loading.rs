//! Spinner shown while an invoice is being analyzed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons, styles};

pub const LOADING_MESSAGE: &str = "Analyzing your invoice...";

pub struct LoadingIndicator<'a> {
    file_name: &'a str,
    frame: usize,
    elapsed_secs: i64,
}

impl<'a> LoadingIndicator<'a> {
    pub fn new(file_name: &'a str, frame: usize) -> Self {
        Self {
            file_name,
            frame,
            elapsed_secs: 0,
        }
    }

    pub fn elapsed_secs(mut self, secs: i64) -> Self {
        self.elapsed_secs = secs.max(0);
        self
    }
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(icons::spinner_frame(self.frame), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(LOADING_MESSAGE, styles::text_primary()),
            Span::raw("  "),
            Span::styled(self.file_name, styles::text_secondary()),
            Span::styled(format!(" ({}s)", self.elapsed_secs), styles::text_muted()),
        ]);

        Paragraph::new(line)
            .block(styles::glass_block(true))
            .render(area, buf);
    }
}
