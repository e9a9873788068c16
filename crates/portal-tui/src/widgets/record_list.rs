//! Card list for the content sections

use portal_app::screen::{Affordance, Card, ListScreen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::{truncate, wrap_text};
use crate::theme::{icons::IconSet, palette, styles};

/// Filtered cards of the active category
pub struct RecordList<'a> {
    screen: &'a ListScreen<'a>,
    query: &'a str,
    icons: IconSet,
    show_images: bool,
}

impl<'a> RecordList<'a> {
    pub fn new(screen: &'a ListScreen<'a>, query: &'a str, icons: IconSet) -> Self {
        Self {
            screen,
            query,
            icons,
            show_images: true,
        }
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }

    fn card_item(&self, card: &Card<'_>, width: usize) -> ListItem<'static> {
        let record = card.record;
        // Two columns for the highlight marker
        let text_width = width.saturating_sub(2);

        let mut lines = vec![
            Line::from(Span::styled(truncate(&record.title, text_width), styles::title())),
            Line::from(Span::styled(record.date.clone(), styles::text_muted())),
        ];

        lines.extend(
            wrap_text(&record.description, text_width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, styles::text_secondary()))),
        );

        if self.show_images {
            if let Some(image) = &record.image {
                lines.push(Line::from(vec![
                    Span::styled(self.icons.image(), styles::text_muted()),
                    Span::raw(" "),
                    Span::styled(
                        truncate(image, text_width.saturating_sub(2)),
                        styles::text_muted(),
                    ),
                ]));
            }
        }

        if let Some(label) = card.affordance.label() {
            let icon = match card.affordance {
                Affordance::ReadMore { .. } => self.icons.read_more(),
                Affordance::ExternalLink { .. } => self.icons.external_link(),
                Affordance::None => "",
            };
            lines.push(Line::from(vec![
                Span::styled(label, styles::accent_bold()),
                Span::raw(" "),
                Span::styled(icon, styles::accent()),
            ]));
        }

        // Blank separator line between cards
        lines.push(Line::default());
        ListItem::new(lines)
    }
}

impl StatefulWidget for RecordList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let title = format!(" {} ({}) ", self.screen.category.label(), self.screen.cards.len());
        let block = styles::glass_block(true)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));

        if self.screen.cards.is_empty() {
            let message = format!("Nenhum resultado para \"{}\"", self.query);
            Paragraph::new(Line::from(Span::styled(message, styles::text_muted())))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(area, buf);
            return;
        }

        let inner_width = block.inner(area).width as usize;
        let items: Vec<ListItem> = self
            .screen
            .cards
            .iter()
            .map(|card| self.card_item(card, inner_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▌ ")
            .highlight_style(Style::default().fg(palette::ACCENT));

        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use portal_app::config::IconMode;
    use portal_app::navigation::Navigation;
    use portal_app::screen::{select, Screen};
    use portal_core::{ContentStore, Section, DEFAULT_RECENT_LIMIT};

    fn render_section(section: Section, query: &str, show_images: bool) -> TestTerminal {
        let content = ContentStore::builtin();
        let nav = Navigation::new(section, query);
        let Screen::List(list) = select(&nav, &content, DEFAULT_RECENT_LIMIT) else {
            panic!("expected list");
        };

        let mut term = TestTerminal::with_size(80, 30);
        let widget =
            RecordList::new(&list, query, IconSet::new(IconMode::Unicode)).show_images(show_images);
        let mut state = ListState::default().with_selected(Some(0));
        term.render_stateful_widget(widget, term.area(), &mut state);
        term
    }

    #[test]
    fn test_announcements_have_no_affordance() {
        let term = render_section(Section::Comunicados, "", true);
        assert!(term.buffer_contains("Manutenção Programada"));
        assert!(term.buffer_contains("14 Mar 2024"));
        assert!(!term.buffer_contains("Ler mais"));
        assert!(!term.buffer_contains("Acesse aqui"));
    }

    #[test]
    fn test_news_cards_offer_read_more_and_image() {
        let term = render_section(Section::Noticias, "", true);
        assert!(term.buffer_contains("Ler mais"));
        assert!(term.buffer_contains("images.unsplash.com"));
    }

    #[test]
    fn test_images_can_be_hidden() {
        let term = render_section(Section::Noticias, "", false);
        assert!(!term.buffer_contains("images.unsplash.com"));
    }

    #[test]
    fn test_document_cards_offer_link() {
        let term = render_section(Section::Documentos, "", true);
        assert!(term.buffer_contains("Acesse aqui"));
        assert!(term.buffer_contains("Documentos (2)"));
    }

    #[test]
    fn test_empty_result_message() {
        let term = render_section(Section::Documentos, "zzz", true);
        assert!(term.buffer_contains("Nenhum resultado para \"zzz\""));
        assert!(term.buffer_contains("Documentos (0)"));
    }
}
