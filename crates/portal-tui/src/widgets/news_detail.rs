//! News article detail view

use portal_app::detail_scroll::DetailScroll;
use portal_app::screen::NewsDetail;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::{truncate, wrap_text};
use crate::theme::{icons::IconSet, palette, styles};

/// Full article: back link, title, date, image line and paragraphs
///
/// Lines are wrapped here rather than by `Paragraph`, so the line count
/// reported to [`DetailScroll`] matches what is drawn.
pub struct NewsDetailView<'a> {
    detail: &'a NewsDetail<'a>,
    icons: IconSet,
    show_images: bool,
}

impl<'a> NewsDetailView<'a> {
    pub fn new(detail: &'a NewsDetail<'a>, icons: IconSet) -> Self {
        Self {
            detail,
            icons,
            show_images: true,
        }
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let record = self.detail.record;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.back(), styles::text_secondary()),
                Span::styled(" Voltar", styles::text_secondary()),
                Span::styled("  (Esc)", styles::text_muted()),
            ]),
            Line::default(),
        ];

        if self.show_images {
            if let Some(image) = record.image.as_deref() {
                lines.push(Line::from(vec![
                    Span::styled(self.icons.image(), styles::text_muted()),
                    Span::raw(" "),
                    Span::styled(truncate(image, width.saturating_sub(2)), styles::text_muted()),
                ]));
                lines.push(Line::default());
            }
        }

        push_wrapped(&mut lines, &record.title, width, styles::accent_bold());
        push_wrapped(&mut lines, &record.date, width, styles::text_muted());

        for paragraph in &self.detail.paragraphs {
            lines.push(Line::default());
            push_wrapped(&mut lines, paragraph, width, styles::text_primary());
        }

        lines
    }
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(line).style(style)),
    );
}

impl StatefulWidget for NewsDetailView<'_> {
    type State = DetailScroll;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DetailScroll) {
        let block = styles::glass_block(true).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);

        let lines = self.lines(inner.width as usize);
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        state.update_content_size(total, inner.height);

        Paragraph::new(lines)
            .block(block)
            .scroll((state.offset, 0))
            .render(area, buf);
    }
}
