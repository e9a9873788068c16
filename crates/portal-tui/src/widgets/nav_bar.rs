//! Bottom navigation bar

use portal_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// One tab per section, the active one highlighted
pub struct NavBar {
    active: Section,
    icons: IconSet,
}

impl NavBar {
    pub fn new(active: Section, icons: IconSet) -> Self {
        Self { active, icons }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), styles::keybinding()),
                    Span::raw(self.icons.section(*section)),
                    Span::raw(" "),
                    Span::raw(section.label()),
                ])
            })
            .collect();

        Tabs::new(titles)
            .block(styles::glass_block(false).style(Style::default().bg(palette::CARD_BG)))
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::border_inactive()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use portal_app::config::IconMode;

    #[test]
    fn test_nav_bar_lists_all_sections() {
        let mut term = TestTerminal::with_size(80, 3);
        let nav = NavBar::new(Section::Comunicados, IconSet::new(IconMode::Unicode));
        term.render_widget(nav, term.area());

        for label in ["Comunicados", "Notícias", "Documentos", "Admin"] {
            assert!(term.line_contains(1, label), "missing {label}");
        }
    }

    #[test]
    fn test_nav_bar_highlights_active_section() {
        let mut term = TestTerminal::with_size(80, 3);
        let nav = NavBar::new(Section::Admin, IconSet::new(IconMode::Unicode));
        term.render_widget(nav, term.area());

        let content = term.line_content(1);
        let col = content
            .find("Admin")
            .map(|byte| content[..byte].chars().count() as u16)
            .expect("Admin rendered");
        let cell = &term.buffer()[(col, 1)];
        assert_eq!(cell.bg, palette::ACCENT);
    }
}
