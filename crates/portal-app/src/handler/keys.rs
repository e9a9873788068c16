//! Key event handlers for different UI modes

use portal_core::Section;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the delete confirmation is open
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave input mode, keeping the query
        InputKey::Esc | InputKey::Enter => Some(Message::StopSearch),

        InputKey::Backspace => {
            let mut query = state.nav.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut query = state.nav.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    if state.nav.section == Section::Admin {
        handle_key_admin(state, key)
    } else if state.nav.in_detail() {
        handle_key_detail(key)
    } else {
        handle_key_list(key)
    }
}

/// Keys available on every screen
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PreviousSection),

        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Section::ALL.get(index).copied().map(Message::SelectSection)
        }

        InputKey::Char('/') => Some(Message::StartSearch),

        _ => None,
    }
}

fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Home | InputKey::PageUp | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::PageDown | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter => Some(Message::ActivateSelected),
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => {
            Some(Message::CloseNewsDetail)
        }
        InputKey::Down | InputKey::Char('j') => Some(Message::DetailScrollDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::DetailScrollUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::DetailScrollTop),
        InputKey::End | InputKey::Char('G') => Some(Message::DetailScrollBottom),
        InputKey::PageUp => Some(Message::DetailPageUp),
        InputKey::PageDown => Some(Message::DetailPageDown),
        _ => None,
    }
}

fn handle_key_admin(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::AdminNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::AdminPrevious),
        InputKey::Right | InputKey::Char('l') => Some(Message::AdminFocusNextCategory),
        InputKey::Left | InputKey::Char('h') => Some(Message::AdminFocusPreviousCategory),
        InputKey::Char('a') => Some(Message::AddRecord(state.admin_category)),
        InputKey::Char('v') | InputKey::Enter => Some(Message::ViewRecord),
        InputKey::Char('V') => Some(Message::ViewAll),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),
        _ => None,
    }
}
