//! Main update function - handles state transitions (TEA pattern)

use portal_core::{Category, RecordRef};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::navigation::NavEvent;
use crate::screen::{Affordance, Screen};
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(section) => {
            state.apply(NavEvent::SelectSection(section));
            state.list_selected = 0;
            state.admin_selected = 0;
            state.detail_scroll.reset();
            debug!("Switched to section {}", section);
            UpdateResult::none()
        }

        Message::NextSection => {
            UpdateResult::message(Message::SelectSection(state.nav.section.next()))
        }

        Message::PreviousSection => {
            UpdateResult::message(Message::SelectSection(state.nav.section.previous()))
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }

        Message::StopSearch => {
            if state.ui_mode == UiMode::SearchInput {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.apply(NavEvent::SetQuery(text));
            state.clamp_list_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Card List
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            let count = state.card_count();
            if state.list_selected + 1 < count {
                state.list_selected += 1;
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.list_selected = state.list_selected.saturating_sub(1);
            UpdateResult::none()
        }

        Message::SelectFirst => {
            state.list_selected = 0;
            UpdateResult::none()
        }

        Message::SelectLast => {
            state.list_selected = state.card_count().saturating_sub(1);
            UpdateResult::none()
        }

        Message::ActivateSelected => handle_activate_selected(state),

        // ─────────────────────────────────────────────────────────
        // News Detail
        // ─────────────────────────────────────────────────────────
        Message::OpenNewsDetail { id } => {
            state.apply(NavEvent::OpenNewsDetail(id));
            state.detail_scroll.reset();
            UpdateResult::none()
        }

        Message::CloseNewsDetail => {
            state.apply(NavEvent::CloseNewsDetail);
            state.detail_scroll.reset();
            state.clamp_list_selection();
            UpdateResult::none()
        }

        Message::DetailScrollDown => {
            state.detail_scroll.scroll_down(1);
            UpdateResult::none()
        }

        Message::DetailScrollUp => {
            state.detail_scroll.scroll_up(1);
            UpdateResult::none()
        }

        Message::DetailScrollTop => {
            state.detail_scroll.scroll_to_top();
            UpdateResult::none()
        }

        Message::DetailScrollBottom => {
            state.detail_scroll.scroll_to_bottom();
            UpdateResult::none()
        }

        Message::DetailPageUp => {
            state.detail_scroll.page_up();
            UpdateResult::none()
        }

        Message::DetailPageDown => {
            state.detail_scroll.page_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Admin Panel
        // ─────────────────────────────────────────────────────────
        Message::AdminNext => {
            if state.admin_selected + 1 < state.recent_count() {
                state.admin_selected += 1;
            }
            UpdateResult::none()
        }

        Message::AdminPrevious => {
            state.admin_selected = state.admin_selected.saturating_sub(1);
            UpdateResult::none()
        }

        Message::AdminFocusNextCategory => {
            state.admin_category = cycle_category(state.admin_category, 1);
            UpdateResult::none()
        }

        Message::AdminFocusPreviousCategory => {
            state.admin_category = cycle_category(state.admin_category, Category::ALL.len() - 1);
            UpdateResult::none()
        }

        Message::AddRecord(category) => {
            info!("Add requested for {} (not supported)", category);
            state.set_notice(format!(
                "{} ({}): indisponível nesta versão",
                category.add_label(),
                category.label()
            ));
            UpdateResult::none()
        }

        Message::ViewRecord => {
            if let Some((target, title)) = selected_recent(state) {
                info!("View requested for {:?} (not supported)", target);
                state.set_notice(format!("Visualizar \"{}\": indisponível nesta versão", title));
            }
            UpdateResult::none()
        }

        Message::ViewAll => {
            info!("View all requested (not supported)");
            state.set_notice("Ver tudo: indisponível nesta versão");
            UpdateResult::none()
        }

        Message::RequestDelete => {
            if let Some((target, _)) = selected_recent(state) {
                state.apply(NavEvent::RequestDelete(target));
            }
            UpdateResult::none()
        }

        Message::ConfirmDelete => {
            if let Some(target) = state.nav.pending_delete {
                info!("Delete of {:?} confirmed, content left unchanged", target);
            }
            state.apply(NavEvent::ConfirmDelete);
            UpdateResult::none()
        }

        Message::CancelDelete => {
            state.apply(NavEvent::CancelDelete);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Links
        // ─────────────────────────────────────────────────────────
        Message::LinkOpenFailed { reason } => {
            warn!("Link open failed: {}", reason);
            state.set_notice(format!("Não foi possível abrir o link: {}", reason));
            UpdateResult::none()
        }
    }
}

/// Trigger the affordance of the selected card.
fn handle_activate_selected(state: &AppState) -> UpdateResult {
    let Screen::List(list) = state.screen() else {
        return UpdateResult::none();
    };
    let Some(card) = list.cards.get(state.list_selected) else {
        return UpdateResult::none();
    };

    match card.affordance {
        Affordance::ReadMore { id } => UpdateResult::message(Message::OpenNewsDetail { id }),
        Affordance::ExternalLink { url } => UpdateResult::action(UpdateAction::OpenUrl {
            url: url.to_string(),
            browser: state.settings.links.browser.clone(),
        }),
        Affordance::None => {
            debug!("Card {} has no action", card.record.id);
            UpdateResult::none()
        }
    }
}

fn cycle_category(current: Category, step: usize) -> Category {
    let len = Category::ALL.len();
    Category::ALL[(current.index() + step) % len]
}

/// Reference and title of the selected "Atividade Recente" entry.
fn selected_recent(state: &AppState) -> Option<(RecordRef, String)> {
    let Screen::Admin(admin) = state.screen() else {
        return None;
    };
    admin
        .recent
        .get(state.admin_selected)
        .map(|entry| (entry.reference(), entry.record.title.clone()))
}
