//! End-to-end flows through the public API: startup options, key handling
//! and the screens they produce.

use portal::{initial_state, StartupOptions};
use portal_app::config::Settings;
use portal_app::message::Message;
use portal_app::process::process_message_with;
use portal_app::screen::{Affordance, Screen};
use portal_app::state::{AppState, UiMode};
use portal_app::{InputKey, UpdateAction};
use portal_core::{Category, RecordRef, Section};

/// Send a message, collecting any actions instead of running them.
fn send(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    process_message_with(state, message, |action| {
        actions.push(action);
        None
    });
    actions
}

fn press(state: &mut AppState, keys: &str) -> Vec<UpdateAction> {
    keys.chars()
        .flat_map(|c| send(state, Message::Key(InputKey::Char(c))))
        .collect()
}

fn card_titles(state: &AppState) -> Vec<String> {
    match state.screen() {
        Screen::List(list) => list
            .cards
            .iter()
            .map(|card| card.record.title.clone())
            .collect(),
        other => panic!("expected list screen, got {}", other.kind()),
    }
}

#[test]
fn search_persists_across_sections() {
    let mut state = AppState::new();

    press(&mut state, "/manu");
    send(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(card_titles(&state), vec!["Manutenção Programada"]);

    press(&mut state, "3");
    assert_eq!(state.nav.section, Section::Documentos);
    assert_eq!(state.nav.query, "manu");
    assert_eq!(card_titles(&state), vec!["Manual do Usuário"]);
}

#[test]
fn document_link_opens_in_browser() {
    let mut state = initial_state(
        Settings::default(),
        &StartupOptions {
            section: Some(Section::Documentos),
            query: Some("privacidade".to_string()),
            news: None,
        },
    );

    let actions = send(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::OpenUrl { url, .. } => assert_eq!(url, "https://example.com/privacy.pdf"),
    }
}

#[test]
fn news_read_more_and_back() {
    let mut state = AppState::new();
    press(&mut state, "2j");

    let Screen::List(list) = state.screen() else {
        panic!("expected list");
    };
    assert_eq!(list.cards[1].affordance, Affordance::ReadMore { id: 2 });

    send(&mut state, Message::Key(InputKey::Enter));
    let Screen::NewsDetail(detail) = state.screen() else {
        panic!("expected news detail");
    };
    assert_eq!(detail.record.title, "Prêmio de Inovação");

    send(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.screen().kind(), "list");
    assert_eq!(state.nav.section, Section::Noticias);
}

#[test]
fn admin_delete_is_confirmed_then_discarded() {
    let mut state = AppState::new();
    press(&mut state, "4d");

    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert_eq!(
        state.nav.pending_delete,
        Some(RecordRef::new(Category::Comunicados, 1))
    );

    press(&mut state, "y");
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.nav.pending_delete, None);

    // The stub never removes anything
    let Screen::Admin(admin) = state.screen() else {
        panic!("expected admin");
    };
    assert!(admin.totals.iter().all(|total| total.total == 2));
}

#[test]
fn leaving_admin_drops_pending_delete() {
    let mut state = AppState::new();
    press(&mut state, "4d");
    assert!(state.nav.pending_delete.is_some());

    send(&mut state, Message::SelectSection(Section::Comunicados));
    assert_eq!(state.nav.pending_delete, None);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn recent_activity_is_newest_first() {
    let state = initial_state(
        Settings::default(),
        &StartupOptions {
            section: Some(Section::Admin),
            ..StartupOptions::default()
        },
    );

    let Screen::Admin(admin) = state.screen() else {
        panic!("expected admin");
    };
    let recent: Vec<_> = admin
        .recent
        .iter()
        .map(|entry| (entry.category, entry.record.date.as_str()))
        .collect();

    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].1, "15 Mar 2024");
    assert_eq!(recent[4].1, "10 Mar 2024");
}
