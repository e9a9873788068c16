//! Detail view scroll state: offset plus the content/viewport sizes last
//! reported by the renderer.

/// Scroll position of the news detail view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailScroll {
    /// Current vertical scroll offset from top
    pub offset: u16,
    /// Total number of wrapped lines (set during render)
    pub total_lines: u16,
    /// Visible lines (set during render)
    pub visible_lines: u16,
}

impl DetailScroll {
    fn max_offset(&self) -> u16 {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    /// Page size: the viewport minus two lines of overlap
    fn page(&self) -> u16 {
        self.visible_lines.saturating_sub(2).max(1)
    }

    /// Update with new content size, pulling the offset back in range
    pub fn update_content_size(&mut self, total: u16, visible: u16) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Forget position and sizes (a different article is shown next)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
