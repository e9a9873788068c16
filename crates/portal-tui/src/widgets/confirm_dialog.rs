//! Delete confirmation modal

use portal_app::screen::DeleteConfirm;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 8;

/// "Confirmar exclusão" overlay drawn over the whole screen
pub struct ConfirmDialog<'a> {
    confirm: &'a DeleteConfirm<'a>,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(confirm: &'a DeleteConfirm<'a>) -> Self {
        Self { confirm }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::render_shadow(buf, dialog);
        modal_overlay::clear_area(buf, dialog);

        let block = styles::modal_block(" Confirmar exclusão ");

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(self.confirm.prompt(), styles::text_primary())),
            Line::default(),
            Line::from(vec![
                Span::styled("[n] ", styles::keybinding()),
                Span::styled("Cancelar", styles::text_secondary()),
                Span::raw("    "),
                Span::styled("[y] ", styles::keybinding()),
                Span::styled("Excluir", styles::status_red()),
            ])
            .alignment(Alignment::Right),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(dialog, buf);
    }
}
