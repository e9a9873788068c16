//! Header bar widget
//!
//! Title plus a subtitle naming the current view.

use portal_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub const TITLE: &str = "Portal de Comunicação";

/// Main header showing the portal title and the active section
pub struct MainHeader {
    section: Section,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(section: Section, icons: IconSet) -> Self {
        Self { section, icons }
    }

    fn subtitle(&self) -> String {
        match self.section {
            Section::Admin => "Painel Administrativo".to_string(),
            other => format!("Visualizando {}", other.id()),
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(self.icons.section(self.section), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::title()),
        ]);
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(2));

        if inner.height > 1 {
            let subtitle = Line::from(Span::styled(self.subtitle(), styles::text_muted()));
            buf.set_line(
                inner.x + 1,
                inner.y + 1,
                &subtitle,
                inner.width.saturating_sub(2),
            );
        }
    }
}
