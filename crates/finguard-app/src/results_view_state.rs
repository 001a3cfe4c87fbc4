//! Scroll state for the results pane.
//!
//! The handler layer moves the offset; the TUI reports content and viewport
//! heights during render so the offset can be clamped.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultsViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ResultsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank.
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> ResultsViewState {
        let mut state = ResultsViewState::new();
        state.update_content_size(total, visible);
        state
    }

    #[test]
    fn test_scroll_down_clamps() {
        let mut state = sized(30, 10);
        state.scroll_down(100);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut state = sized(30, 10);
        state.scroll_up(5);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_down_and_bottom() {
        let mut state = sized(50, 12);
        state.page_down();
        assert_eq!(state.offset, 10);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 38);
        state.scroll_to_top();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_content_shrink_clamps_offset() {
        let mut state = sized(50, 10);
        state.scroll_to_bottom();
        state.update_content_size(15, 10);
        assert_eq!(state.offset, 5);
    }

    #[test]
    fn test_no_scroll_when_content_fits() {
        let mut state = sized(5, 10);
        state.scroll_down(3);
        assert_eq!(state.offset, 0);
    }
}
