//! Admin panel: "Gerenciar Conteúdo" cards and "Atividade Recente"

use portal_app::screen::AdminScreen;
use portal_core::Category;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate;
use crate::theme::{icons::IconSet, palette, styles};

/// Category card height: label, total and add button inside a border
const CARD_HEIGHT: u16 = 5;

pub struct AdminPanel<'a> {
    screen: &'a AdminScreen<'a>,
    icons: IconSet,
    focused_category: Category,
    selected: usize,
}

impl<'a> AdminPanel<'a> {
    pub fn new(screen: &'a AdminScreen<'a>, icons: IconSet) -> Self {
        Self {
            screen,
            icons,
            focused_category: Category::Comunicados,
            selected: 0,
        }
    }

    /// Category card with keyboard focus
    pub fn focused_category(mut self, category: Category) -> Self {
        self.focused_category = category;
        self
    }

    /// Selected "Atividade Recente" entry
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    fn render_manage(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Gerenciar Conteúdo ", styles::title()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        for (total, column) in self.screen.totals.iter().zip(columns.iter()) {
            let focused = total.category == self.focused_category;
            let add_style = if focused {
                styles::focused_selected()
            } else {
                styles::accent()
            };
            let lines = vec![
                Line::from(Span::styled(total.category.id(), styles::title())),
                Line::from(Span::styled(
                    format!("Total: {}", total.total),
                    styles::text_secondary(),
                )),
                Line::from(Span::styled(
                    format!("{} {}", self.icons.add(), total.add_label),
                    add_style,
                )),
            ];
            Paragraph::new(lines)
                .block(styles::glass_block(focused))
                .render(*column, buf);
        }
    }

    fn render_recent(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Atividade Recente ", styles::title()))
            .title(
                Line::from(vec![
                    Span::styled(format!(" {} Ver tudo ", self.icons.view()), styles::accent()),
                    Span::styled("(V) ", styles::keybinding()),
                ])
                .right_aligned(),
            )
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let buttons = format!("{}  {}", self.icons.view(), self.icons.delete());
        let buttons_width = buttons.width() as u16;

        for (i, entry) in self.screen.recent.iter().enumerate() {
            // Two rows per entry: title and date
            let y = inner.y + (i as u16) * 2;
            if y >= inner.bottom() {
                break;
            }

            let selected = i == self.selected;
            let row = Rect::new(inner.x, y, inner.width, 1);
            if selected {
                buf.set_style(row, Style::default().bg(palette::POPUP_BG));
            }

            let marker = if selected { "▌ " } else { "  " };
            let title_width = inner.width.saturating_sub(buttons_width + 3) as usize;
            let title = Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(truncate(&entry.record.title, title_width), styles::title()),
            ]);
            buf.set_line(inner.x, y, &title, inner.width);

            let button_style = if selected {
                styles::focused_selected()
            } else {
                styles::text_muted()
            };
            let button_x = inner.right().saturating_sub(buttons_width + 1);
            buf.set_string(button_x, y, &buttons, button_style);

            if y + 1 < inner.bottom() {
                let date = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(entry.record.date.as_str(), styles::text_muted()),
                    Span::styled(format!("  {}", entry.category.label()), styles::text_muted()),
                ]);
                buf.set_line(inner.x, y + 1, &date, inner.width);
            }
        }
    }
}

impl Widget for AdminPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [manage, recent] =
            Layout::vertical([Constraint::Length(CARD_HEIGHT + 2), Constraint::Min(3)]).areas(area);

        self.render_manage(manage, buf);
        self.render_recent(recent, buf);
    }
}
