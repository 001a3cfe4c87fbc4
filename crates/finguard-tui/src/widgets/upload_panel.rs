//! Upload control: drop target and path input.

use finguard_app::UploadControlState;
use finguard_core::SUPPORTED_FORMATS_LABEL;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub const DROP_PROMPT: &str = "Drag and drop your invoice here, or type its path and press Enter";
pub const DROP_ACTIVE: &str = "Drop the file here";
pub const DISABLED_PROMPT: &str = "Upload in progress";

pub struct UploadPanel<'a> {
    state: &'a UploadControlState,
    icons: IconSet,
    disabled: bool,
}

impl<'a> UploadPanel<'a> {
    pub fn new(state: &'a UploadControlState, icons: IconSet) -> Self {
        Self {
            state,
            icons,
            disabled: false,
        }
    }

    /// Render greyed out, with input hidden
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn prompt_line(&self) -> Line<'static> {
        if self.disabled {
            return Line::from(vec![
                Span::styled(self.icons.upload(), styles::text_muted()),
                Span::raw(" "),
                Span::styled(DISABLED_PROMPT, styles::text_muted()),
            ]);
        }

        if self.state.drag_active() {
            Line::from(vec![
                Span::styled(self.icons.upload(), styles::accent()),
                Span::raw(" "),
                Span::styled(DROP_ACTIVE, styles::accent_bold()),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.icons.upload(), styles::accent()),
                Span::raw(" "),
                Span::styled(DROP_PROMPT, styles::text_primary()),
            ])
        }
    }

    fn input_line(&self) -> Line<'_> {
        let prompt_style = if self.disabled {
            styles::text_muted()
        } else {
            styles::accent_bold()
        };
        let mut spans = vec![Span::styled("> ", prompt_style)];
        if !self.disabled {
            spans.push(Span::styled(self.state.input.as_str(), styles::text_primary()));
            spans.push(Span::styled("█", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = !self.disabled && self.state.drag_active();
        let block = styles::glass_block(focused).title(Span::styled(
            " Upload Invoice ",
            if self.disabled {
                styles::text_muted()
            } else {
                styles::heading()
            },
        ));

        let mut lines = vec![
            self.prompt_line(),
            self.input_line(),
            Line::from(Span::styled(
                format!("Supported formats: {SUPPORTED_FORMATS_LABEL}"),
                styles::text_muted(),
            )),
        ];

        if let Some(hint) = self.state.hint.as_deref() {
            lines.push(Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(hint, styles::status_red()),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
