//! Header with the product title, subtitle and tagline.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub const TITLE: &str = "FinGuard AI";
pub const SUBTITLE: &str = "Smart Invoice Validator";
pub const TAGLINE: &str =
    "Upload your invoice and let our AI analyze it for potential risks and anomalies";

/// Main header. The backend origin is shown right-aligned on the title row
/// when there is room for it.
pub struct MainHeader<'a> {
    icons: IconSet,
    origin: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(icons: IconSet) -> Self {
        Self {
            icons,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if let Some(origin) = self.origin {
            let backend = Line::from(vec![
                Span::styled("backend ", styles::text_muted()),
                Span::styled(origin, styles::text_secondary()),
                Span::raw(" "),
            ]);
            let backend_width = backend.width() as u16;
            if title_width + backend_width + 2 <= inner.width {
                let x = inner.x + inner.width - backend_width;
                buf.set_line(x, inner.y, &backend, backend_width);
            }
        }

        let rest = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                SUBTITLE,
                styles::heading().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(TAGLINE, styles::text_secondary())),
        ])
        .alignment(Alignment::Left)
        .render(
            Rect {
                x: rest.x + 1,
                width: rest.width.saturating_sub(1),
                ..rest
            },
            buf,
        );
    }
}
