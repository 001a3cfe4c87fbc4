//! Quit confirmation shown while an upload is in flight.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 54;
const MODAL_HEIGHT: u16 = 8;

pub struct ConfirmQuitDialog<'a> {
    file_name: Option<&'a str>,
}

impl<'a> ConfirmQuitDialog<'a> {
    pub fn new(file_name: Option<&'a str>) -> Self {
        Self { file_name }
    }
}

impl Widget for ConfirmQuitDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Quit FinGuard? ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Consequence
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        let message = match self.file_name {
            Some(name) => format!("{name} is still being analyzed."),
            None => "An invoice is still being analyzed.".to_string(),
        };
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        Paragraph::new("Quitting now discards the result.")
            .alignment(Alignment::Center)
            .style(styles::text_secondary())
            .render(chunks[2], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green()),
            Span::styled("] Quit  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red()),
            Span::styled("] Keep waiting", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
