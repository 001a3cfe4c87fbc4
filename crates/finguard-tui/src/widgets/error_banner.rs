//! Inline error banner for a failed analysis request.
//!
//! The message is wrapped up front so the layout can give the banner as
//! many rows as the text needs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::text::wrap;
use crate::theme::{icons::IconSet, styles};

pub struct ErrorBanner<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }

    /// Rows needed at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.wrapped(width).len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn wrapped(&self, width: u16) -> Vec<String> {
        let text = format!("{} {}", self.icons.alert(), self.message);
        wrap(&text, usize::from(width.saturating_sub(2)))
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).border_style(styles::status_red());
        let lines: Vec<Line> = self
            .wrapped(area.width)
            .into_iter()
            .map(|l| Line::styled(l, styles::status_red()))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use finguard_app::config::IconMode;

    #[test]
    fn test_banner_shows_message() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(
            ErrorBanner::new("Unreadable scan", IconSet::new(IconMode::Unicode)),
            term.area(),
        );

        assert!(term.buffer_contains("⚠ Unreadable scan"));
    }

    #[test]
    fn test_height_grows_with_message() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(ErrorBanner::new("Unreadable scan", icons).height(80), 3);

        let long = "Could not connect to the server at http://127.0.0.1:5001. \
                    Please make sure the backend server is running.";
        assert_eq!(ErrorBanner::new(long, icons).height(80), 4);
        assert_eq!(ErrorBanner::new(long, icons).height(40), 5);
    }

    #[test]
    fn test_wrapped_message_renders_every_row() {
        let icons = IconSet::new(IconMode::Unicode);
        let long = "Could not connect to the server at http://127.0.0.1:5001. \
                    Please make sure the backend server is running.";
        let banner = ErrorBanner::new(long, icons);
        let mut term = TestTerminal::with_size(40, banner.height(40));
        term.render_widget(ErrorBanner::new(long, icons), term.area());

        assert!(term.buffer_contains("Could not connect"));
        assert!(term.buffer_contains("server is running."));
    }
}
