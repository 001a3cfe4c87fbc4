//! Scroll message handlers for the results pane

use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.results_view.scroll_up(1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.results_view.scroll_down(1);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.results_view.scroll_to_top();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.results_view.scroll_to_bottom();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.results_view.page_up();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.results_view.page_down();
    UpdateResult::none()
}
