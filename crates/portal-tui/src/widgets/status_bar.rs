//! One-line status bar: the current notice, or key hints for the mode

use portal_app::state::{AppState, UiMode};
use portal_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::ConfirmDialog => &[("y", "excluir"), ("n", "cancelar")],
            UiMode::SearchInput => &[("Enter", "concluir"), ("Ctrl+U", "limpar")],
            UiMode::Normal if self.state.nav.section == Section::Admin => &[
                ("←/→", "categoria"),
                ("a", "adicionar"),
                ("v", "ver"),
                ("d", "excluir"),
                ("q", "sair"),
            ],
            UiMode::Normal if self.state.nav.in_detail() => {
                &[("Esc", "voltar"), ("↑/↓", "rolar"), ("q", "sair")]
            }
            UiMode::Normal => &[
                ("1-4", "seção"),
                ("/", "pesquisar"),
                ("Enter", "abrir"),
                ("q", "sair"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let line = match &self.state.notice {
            Some(notice) => Line::from(Span::styled(notice.text.as_str(), styles::notice())),
            None => {
                let mut spans = Vec::new();
                for (key, action) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
                }
                Line::from(spans)
            }
        };

        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
    }
}
