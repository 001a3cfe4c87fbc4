//! Render boundary around one display subtree of an analysis.
//!
//! Each subtree is interpreted from raw JSON right before it is drawn. A
//! subtree that cannot be interpreted is replaced by a fallback message
//! while the other subtree still renders normally.

use finguard_core::ShapeError;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, styles};

pub const FALLBACK_PREFIX: &str = "Something went wrong";

#[derive(Debug, Clone, Copy)]
pub struct RenderBoundary {
    icons: IconSet,
}

impl RenderBoundary {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    /// Render `subtree` with `view`, or the fallback if it failed to parse.
    pub fn lines<T, F>(&self, subtree: Result<T, ShapeError>, view: F) -> Vec<Line<'static>>
    where
        F: FnOnce(T) -> Vec<Line<'static>>,
    {
        match subtree {
            Ok(value) => view(value),
            Err(e) => self.fallback(&e),
        }
    }

    pub fn fallback(&self, error: &ShapeError) -> Vec<Line<'static>> {
        match error {
            ShapeError::Missing => vec![Line::from(Span::styled(
                error.to_string(),
                styles::text_muted(),
            ))],
            ShapeError::Json(_) => vec![Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(
                    format!("{FALLBACK_PREFIX}: {error}"),
                    styles::status_red(),
                ),
            ])],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finguard_app::config::IconMode;
    use finguard_core::RiskAssessment;
    use serde_json::json;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn boundary() -> RenderBoundary {
        RenderBoundary::new(IconSet::new(IconMode::Unicode))
    }

    #[test]
    fn test_successful_subtree_uses_view() {
        let lines = boundary().lines(Ok::<_, ShapeError>(3), |n| {
            vec![Line::from(format!("{n} findings"))]
        });
        assert_eq!(text(&lines), "3 findings");
    }

    #[test]
    fn test_malformed_subtree_shows_reason() {
        let subtree = RiskAssessment::from_value(&json!({ "findings": "all good" }));
        let lines = boundary().lines(subtree, |_| vec![Line::from("unreachable")]);

        let rendered = text(&lines);
        assert!(rendered.contains("Something went wrong: "));
        assert!(rendered.contains("expected a list"));
        assert!(!rendered.contains("unreachable"));
    }

    #[test]
    fn test_missing_subtree_is_not_an_error() {
        let lines = boundary().fallback(&ShapeError::Missing);
        assert_eq!(text(&lines), "No invoice data available");
    }
}
