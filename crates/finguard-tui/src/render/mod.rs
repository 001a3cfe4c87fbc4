//! Main render/view function (View in TEA pattern)


use chrono::Local;
use finguard_app::{AppState, RequestState, ResultsViewState, UiMode};
use finguard_core::AnalysisResult;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, styles};

pub const IDLE_PLACEHOLDER: &str =
    "Results will appear here once an invoice has been analyzed.";

/// Render the complete UI (View function in TEA)
///
/// Only the results scroll state is written, so the offset can be clamped
/// to the content that was actually laid out.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let icons = IconSet::new(state.settings.ui.icons);

    let status_height = match &state.request {
        RequestState::Loading { .. } => layout::STATUS_HEIGHT,
        RequestState::Failed { message } => {
            widgets::ErrorBanner::new(message, icons).height(area.width)
        }
        RequestState::Idle | RequestState::Succeeded(_) => 0,
    };
    let areas = layout::create(area, status_height);

    frame.render_widget(
        widgets::MainHeader::new(icons).with_origin(state.backend_origin()),
        areas.header,
    );
    frame.render_widget(
        widgets::UploadPanel::new(&state.upload, icons).disabled(state.upload_disabled()),
        areas.upload,
    );

    match &state.request {
        RequestState::Loading {
            file_name,
            started_at,
        } => {
            let elapsed = (Local::now() - *started_at).num_seconds();
            frame.render_widget(
                widgets::LoadingIndicator::new(file_name, state.spinner_frame)
                    .elapsed_secs(elapsed),
                areas.status,
            );
        }
        RequestState::Failed { message } => {
            frame.render_widget(widgets::ErrorBanner::new(message, icons), areas.status);
        }
        RequestState::Idle | RequestState::Succeeded(_) => {}
    }

    render_results(
        frame,
        &state.request,
        &mut state.results_view,
        areas.content,
        icons,
    );

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    if state.ui_mode == UiMode::ConfirmQuit {
        let file_name = match &state.request {
            RequestState::Loading { file_name, .. } => Some(file_name.as_str()),
            _ => None,
        };
        frame.render_widget(widgets::ConfirmQuitDialog::new(file_name), area);
    }
}

fn render_results(
    frame: &mut Frame,
    request: &RequestState,
    view_state: &mut ResultsViewState,
    area: Rect,
    icons: IconSet,
) {
    let block = styles::glass_block(false).title(Span::styled(" Analysis ", styles::heading()));
    let inner = block.inner(area);

    let lines = match request {
        RequestState::Succeeded(result) => result_lines(result, inner.width, icons),
        RequestState::Idle => vec![Line::from(Span::styled(
            IDLE_PLACEHOLDER,
            styles::text_muted(),
        ))],
        RequestState::Loading { .. } | RequestState::Failed { .. } => Vec::new(),
    };

    view_state.update_content_size(lines.len(), inner.height as usize);

    let mut block = block;
    if view_state.total_lines > view_state.visible_lines {
        let end = (view_state.offset + view_state.visible_lines).min(view_state.total_lines);
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(
                    " {}-{} of {} ",
                    view_state.offset + 1,
                    end,
                    view_state.total_lines
                ),
                styles::text_muted(),
            ))
            .right_aligned(),
        );
    }

    let offset = u16::try_from(view_state.offset).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((offset, 0)),
        area,
    );
}

/// Invoice and risk sections, each behind its own render boundary.
fn result_lines(result: &AnalysisResult, width: u16, icons: IconSet) -> Vec<Line<'static>> {
    let boundary = widgets::RenderBoundary::new(icons);

    let mut lines = boundary.lines(result.invoice(), |record| {
        widgets::InvoiceResults::new(&record, width).lines()
    });
    lines.push(Line::default());
    lines.push(widgets::metadata_line(result));
    lines.push(Line::default());
    lines.extend(boundary.lines(result.risk(), |assessment| {
        widgets::RiskAssessmentView::new(&assessment, icons, width).lines()
    }));
    lines
}
