//! Application state (Model in TEA pattern)

use portal_core::prelude::*;
use portal_core::{Category, ContentStore};

use crate::config::Settings;
use crate::detail_scroll::DetailScroll;
use crate::navigation::{reduce, NavEvent, Navigation};
use crate::screen::{self, Screen};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing lists, the detail view or the admin panel
    #[default]
    Normal,

    /// Typing in the search box
    SearchInput,

    /// Delete confirmation overlay is open
    ConfirmDialog,
}

/// Transient status bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Ticks left before the notice disappears
    pub ticks_left: u16,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fixed content shown by the portal
    pub content: ContentStore,

    /// Navigation snapshot; only changed through [`AppState::apply`]
    pub nav: Navigation,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Selected card in the list screen
    pub list_selected: usize,

    /// Focused "Gerenciar Conteúdo" card
    pub admin_category: Category,

    /// Selected "Atividade Recente" entry
    pub admin_selected: usize,

    /// Scroll of the news detail view
    pub detail_scroll: DetailScroll,

    /// Status bar notice
    pub notice: Option<Notice>,

    /// Settings loaded from config.toml
    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with built-in content and default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State with built-in content, starting in the configured section.
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_content(ContentStore::builtin(), settings)
    }

    pub fn with_content(content: ContentStore, settings: Settings) -> Self {
        Self {
            content,
            nav: Navigation::new(settings.behavior.initial_section, ""),
            ui_mode: UiMode::Normal,
            list_selected: 0,
            admin_category: Category::Comunicados,
            admin_selected: 0,
            detail_scroll: DetailScroll::default(),
            notice: None,
            settings,
            quitting: false,
        }
    }

    /// Screen for the current navigation snapshot.
    pub fn screen(&self) -> Screen<'_> {
        screen::select(
            &self.nav,
            &self.content,
            self.settings.ui.recent_activity_limit,
        )
    }

    /// Run a navigation transition through the reducer.
    ///
    /// The delete overlay and [`UiMode::ConfirmDialog`] always agree after
    /// this returns. A delete request for a record the store does not hold
    /// is dropped, so no confirmation is pending without an overlay.
    pub fn apply(&mut self, event: NavEvent) {
        if let NavEvent::RequestDelete(target) = &event {
            if self.content.get(*target).is_none() {
                warn!("Ignoring delete request for missing record {:?}", target);
                return;
            }
        }

        self.nav = reduce(&self.nav, event);

        if self.nav.pending_delete.is_some() {
            self.ui_mode = UiMode::ConfirmDialog;
        } else if self.ui_mode == UiMode::ConfirmDialog {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Number of cards in the list screen (0 on other screens).
    pub fn card_count(&self) -> usize {
        match self.screen() {
            Screen::List(list) => list.cards.len(),
            Screen::Admin(_) | Screen::NewsDetail(_) => 0,
        }
    }

    /// Number of entries in "Atividade Recente".
    pub fn recent_count(&self) -> usize {
        self.content
            .iter()
            .count()
            .min(self.settings.ui.recent_activity_limit)
    }

    /// Keep the list selection inside the visible cards.
    pub fn clamp_list_selection(&mut self) {
        let count = self.card_count();
        self.list_selected = self.list_selected.min(count.saturating_sub(1));
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            ticks_left: self.settings.ui.notice_ticks,
        });
    }

    /// Age the notice by one tick, dropping it when it expires.
    pub fn tick_notice(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
