//! Search box widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub const PLACEHOLDER: &str = "Pesquisar...";

/// Search box showing the live query, or a placeholder when empty
pub struct SearchInput<'a> {
    query: &'a str,
    /// Whether keystrokes go to the box
    active: bool,
    icons: IconSet,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, icons: IconSet) -> Self {
        Self {
            query,
            active: false,
            icons,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.active).style(Style::default().bg(palette::CARD_BG));

        let icon_style = if self.active {
            styles::keybinding()
        } else {
            styles::text_muted()
        };
        let mut spans = vec![Span::styled(self.icons.search(), icon_style), Span::raw(" ")];

        if self.query.is_empty() && !self.active {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary()));
        }

        if self.active {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
