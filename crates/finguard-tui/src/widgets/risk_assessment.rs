//! Risk assessment: level chip, confidence and findings.

use finguard_core::{format_inr, Finding, RiskAssessment, UnusualItem, NOT_AVAILABLE};
use ratatui::text::{Line, Span};

use super::text::wrap;
use crate::theme::{icons::IconSet, styles};

pub const HEADING: &str = "Risk Assessment";

/// Indent for wrapped finding text, aligned after the bullet
const INDENT: &str = "   ";

pub struct RiskAssessmentView<'a> {
    assessment: &'a RiskAssessment,
    icons: IconSet,
    width: usize,
}

impl<'a> RiskAssessmentView<'a> {
    pub fn new(assessment: &'a RiskAssessment, icons: IconSet, width: u16) -> Self {
        Self {
            assessment,
            icons,
            width: width as usize,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let severity = self.assessment.severity();
        let mut lines = vec![
            Line::from(Span::styled(HEADING, styles::heading())),
            Line::default(),
            Line::from(vec![
                Span::styled("Overall Risk Level: ", styles::text_secondary()),
                Span::styled(
                    format!(" {} ", self.assessment.level_label()),
                    styles::severity_chip(severity),
                ),
            ]),
            Line::from(vec![
                Span::styled("Confidence Score: ", styles::text_secondary()),
                Span::styled(self.assessment.confidence_percent(), styles::heading()),
            ]),
            Line::default(),
            Line::from(Span::styled("Findings", styles::heading())),
        ];

        if self.assessment.findings.is_empty() {
            lines.push(Line::from(Span::styled(
                "No findings reported",
                styles::text_muted(),
            )));
        }
        for finding in &self.assessment.findings {
            lines.extend(self.finding(finding));
        }

        if !self.assessment.unusual_items.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Unusual Items", styles::heading())));
            for item in &self.assessment.unusual_items {
                lines.extend(self.unusual_item(item));
            }
        }

        lines
    }

    fn text_width(&self) -> usize {
        self.width.saturating_sub(INDENT.len()).max(10)
    }

    fn finding(&self, finding: &Finding) -> Vec<Line<'static>> {
        let style = styles::severity(self.assessment.severity());
        let mut lines = Vec::new();

        for (i, chunk) in wrap(finding.description(), self.text_width())
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 {
                Span::styled(format!(" {} ", self.icons.bullet()), style)
            } else {
                Span::raw(INDENT)
            };
            lines.push(Line::from(vec![lead, Span::styled(chunk, styles::text_primary())]));
        }

        if let Some(details) = finding.details() {
            for chunk in wrap(details, self.text_width()) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(chunk, styles::text_secondary()),
                ]));
            }
        }
        lines
    }

    fn unusual_item(&self, item: &UnusualItem) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {} ", self.icons.alert()), styles::status_yellow()),
            Span::styled(
                item.item.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                styles::text_primary(),
            ),
            Span::raw("  "),
            Span::styled(format_inr(item.price), styles::heading()),
        ])];
        if let Some(reason) = item.reason.as_deref() {
            for chunk in wrap(reason, self.text_width()) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(chunk, styles::text_secondary()),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_risk;
    use finguard_app::config::IconMode;
    use finguard_core::RiskSeverity;
    use ratatui::style::Style;
    use serde_json::json;

    fn render(assessment: &RiskAssessment, width: u16) -> Vec<Line<'static>> {
        RiskAssessmentView::new(assessment, IconSet::new(IconMode::Unicode), width).lines()
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn chip_style(lines: &[Line<'_>]) -> Style {
        let line = lines
            .iter()
            .find(|l| l.to_string().contains("Overall Risk Level:"))
            .expect("risk level line");
        line.spans[1].style
    }

    #[test]
    fn test_level_and_confidence() {
        let assessment = RiskAssessment::from_value(&sample_risk()).unwrap();
        let lines = text(&render(&assessment, 96));

        assert!(lines.iter().any(|l| l == "Overall Risk Level:  MEDIUM "));
        assert!(lines.iter().any(|l| l == "Confidence Score: 87.5%"));
    }

    #[test]
    fn test_chip_style_follows_severity() {
        for (level, severity) in [
            ("HIGH", RiskSeverity::High),
            ("Medium", RiskSeverity::Medium),
            ("low", RiskSeverity::Low),
            ("critical", RiskSeverity::Low),
        ] {
            let assessment = RiskAssessment::from_value(&json!({ "risk_level": level })).unwrap();
            let lines = render(&assessment, 96);
            assert_eq!(chip_style(&lines), styles::severity_chip(severity), "{level}");
        }
    }

    #[test]
    fn test_unknown_level_label_is_upper_cased() {
        let assessment =
            RiskAssessment::from_value(&json!({ "risk_level": "critical" })).unwrap();
        let lines = text(&render(&assessment, 96));
        assert!(lines.iter().any(|l| l.contains(" CRITICAL ")));
    }

    #[test]
    fn test_findings_of_both_shapes() {
        let assessment = RiskAssessment::from_value(&sample_risk()).unwrap();
        let lines = text(&render(&assessment, 96));

        assert!(lines.iter().any(|l| l == " • Round number amount"));
        assert!(lines.iter().any(|l| l == " • Executive fee"));
        assert!(lines.iter().any(|l| l == "   Line 2 is unusually high"));
    }

    #[test]
    fn test_defaults_for_empty_assessment() {
        let lines = text(&render(&RiskAssessment::default(), 96));

        assert!(lines.iter().any(|l| l.contains(" LOW ")));
        assert!(lines.iter().any(|l| l == "Confidence Score: 0.0%"));
        assert!(lines.iter().any(|l| l == "No findings reported"));
        assert!(!lines.iter().any(|l| l == "Unusual Items"));
    }

    #[test]
    fn test_unusual_items() {
        let assessment = RiskAssessment::from_value(&sample_risk()).unwrap();
        let lines = text(&render(&assessment, 96));

        assert!(lines.iter().any(|l| l == "Unusual Items"));
        assert!(lines
            .iter()
            .any(|l| l.contains("CEO licence") && l.contains("₹90,000.00")));
        assert!(lines
            .iter()
            .any(|l| l.contains("Far above typical licence cost")));
    }

    #[test]
    fn test_long_finding_wraps() {
        let assessment = RiskAssessment::from_value(&json!({
            "findings": ["one two three four five six seven eight nine ten"]
        }))
        .unwrap();
        let lines = text(&render(&assessment, 23));

        let first = lines.iter().position(|l| l.starts_with(" • one")).unwrap();
        assert!(lines[first + 1].starts_with(INDENT));
        assert!(lines[first + 1].len() <= 23);
    }
}
