// Scroll state for the section content view
//
// One instance per section, so a reader's position survives navigating away
// and back. The content view is static text, so there is no auto-follow:
// the offset only moves when the user moves it, and render clamps it once
// the real line count is known.

/// Scroll state for a single section's content
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
        }
    }

    /// Update content and viewport dimensions.
    /// Call this each render frame with current sizes.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll up by one line
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down by one line
    ///
    /// If dimensions are not set yet (total = 0), allow unbounded scroll;
    /// the next render clamps to actual content size.
    pub fn scroll_down(&mut self) {
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows the viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset (keeps the last page full)
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_unbounded_before_dimensions_known() {
        let mut scroll = ScrollState::new();
        scroll.scroll_down();
        scroll.scroll_down();
        assert_eq!(scroll.offset(), 2);

        // First render clamps to the real content size
        scroll.update_dimensions(10, 10);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_scroll_clamps_at_bottom() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        for _ in 0..100 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(30, 10);
        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 20); // clamped to max
        scroll.page_up();
        assert_eq!(scroll.offset(), 10);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_needs_scrollbar() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 10);
        assert!(!scroll.needs_scrollbar());
        scroll.update_dimensions(15, 10);
        assert!(scroll.needs_scrollbar());
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 10);
        for _ in 0..40 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 40);
        scroll.update_dimensions(12, 10);
        assert_eq!(scroll.offset(), 2);
    }
}
