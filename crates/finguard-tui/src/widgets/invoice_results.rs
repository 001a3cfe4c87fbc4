//! Invoice details: summary cards, line-item table and total row.

use finguard_core::{format_inr, format_quantity, AnalysisResult, InvoiceRecord};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::text::{pad_left, pad_right};
use crate::theme::styles;

pub const HEADING: &str = "Invoice Details";
pub const LINE_ITEMS_HEADING: &str = "Line Items";

const QTY_WIDTH: usize = 10;
const MONEY_WIDTH: usize = 16;
const MIN_DESCRIPTION_WIDTH: usize = 12;

/// Minimum width for the four cards to sit on one row
const CARD_ROW_WIDTH: usize = 72;

pub struct InvoiceResults<'a> {
    record: &'a InvoiceRecord,
    width: usize,
}

impl<'a> InvoiceResults<'a> {
    pub fn new(record: &'a InvoiceRecord, width: u16) -> Self {
        Self {
            record,
            width: width as usize,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(HEADING, styles::heading())), Line::default()];
        lines.extend(self.cards());
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(LINE_ITEMS_HEADING, styles::heading())));
        lines.extend(self.table());
        lines
    }

    fn cards(&self) -> Vec<Line<'static>> {
        let record = self.record;
        let cards = [
            ("Invoice Number", record.invoice_number().to_string()),
            ("Date", record.date().to_string()),
            ("Vendor", record.vendor().to_string()),
            ("Total Amount", format_inr(record.total_amount)),
        ];

        let per_row = if self.width >= CARD_ROW_WIDTH { 4 } else { 2 };
        let col = (self.width / per_row).max(1);

        let mut lines = Vec::new();
        for row in cards.chunks(per_row) {
            let labels = row
                .iter()
                .map(|(label, _)| Span::styled(pad_right(label, col), styles::text_secondary()))
                .collect::<Vec<_>>();
            let values = row
                .iter()
                .map(|(_, value)| Span::styled(pad_right(value, col), styles::heading()))
                .collect::<Vec<_>>();
            lines.push(Line::from(labels));
            lines.push(Line::from(values));
        }
        lines
    }

    fn description_width(&self) -> usize {
        self.width
            .saturating_sub(QTY_WIDTH + 2 * MONEY_WIDTH)
            .max(MIN_DESCRIPTION_WIDTH)
    }

    fn table(&self) -> Vec<Line<'static>> {
        let desc = self.description_width();
        let rule_width = desc + QTY_WIDTH + 2 * MONEY_WIDTH;
        let header_style = styles::text_secondary().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(pad_right("Description", desc), header_style),
                Span::styled(pad_left("Quantity", QTY_WIDTH), header_style),
                Span::styled(pad_left("Unit Price", MONEY_WIDTH), header_style),
                Span::styled(pad_left("Amount", MONEY_WIDTH), header_style),
            ]),
            rule(rule_width),
        ];

        if self.record.line_items.is_empty() {
            lines.push(Line::from(Span::styled(
                "No line items",
                styles::text_muted(),
            )));
        }

        for item in &self.record.line_items {
            lines.push(Line::from(vec![
                Span::styled(pad_right(item.description(), desc), styles::text_primary()),
                Span::styled(
                    pad_left(&format_quantity(item.quantity()), QTY_WIDTH),
                    styles::text_primary(),
                ),
                Span::styled(
                    pad_left(&format_inr(Some(item.unit_price())), MONEY_WIDTH),
                    styles::text_primary(),
                ),
                Span::styled(
                    pad_left(&format_inr(Some(item.amount())), MONEY_WIDTH),
                    styles::text_primary(),
                ),
            ]));
        }

        lines.push(rule(rule_width));
        lines.push(Line::from(vec![
            Span::styled(
                pad_left("Total", desc + QTY_WIDTH + MONEY_WIDTH),
                styles::heading(),
            ),
            Span::styled(
                pad_left(&format_inr(self.record.total_amount), MONEY_WIDTH),
                styles::heading(),
            ),
        ]));
        lines
    }
}

fn rule(width: usize) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width), styles::text_muted()))
}

/// When the result arrived, and the backend's audit hash if it sent one.
pub fn metadata_line(result: &AnalysisResult) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Received ", styles::text_muted()),
        Span::styled(
            result.received_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            styles::text_secondary(),
        ),
    ];
    if let Some(hash) = &result.action_hash {
        spans.push(Span::styled("  ·  Audit hash ", styles::text_muted()));
        spans.push(Span::styled(hash.clone(), styles::text_secondary()));
    }
    Line::from(spans)
}
