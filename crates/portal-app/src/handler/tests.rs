//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::NavEvent;
use crate::screen::Screen;
use crate::state::{AppState, UiMode};
use portal_core::{Category, RecordRef, Section};

/// Feed a message and any chained follow-ups through `update`, collecting
/// the actions it requests.
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    run(state, Message::Key(InputKey::Char('/')));
    for c in text.chars() {
        run(state, Message::Key(InputKey::Char(c)));
    }
    run(state, Message::Key(InputKey::Enter));
}

fn list_titles(state: &AppState) -> Vec<String> {
    match state.screen() {
        Screen::List(list) => list.cards.iter().map(|c| c.record.title.clone()).collect(),
        other => panic!("expected list, got {}", other.kind()),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    );
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = AppState::new();
    for mode in [UiMode::Normal, UiMode::SearchInput, UiMode::ConfirmDialog] {
        state.ui_mode = mode;
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit),
            "mode {:?}",
            mode
        );
    }
}

#[test]
fn test_q_in_search_is_typed() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::SearchInput;
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::SearchInput {
            text: "q".to_string()
        })
    );
}

// ─────────────────────────────────────────────────────────
// Section Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_select_sections() {
    let state = AppState::new();
    let expected = [
        ('1', Section::Comunicados),
        ('2', Section::Noticias),
        ('3', Section::Documentos),
        ('4', Section::Admin),
    ];
    for (key, section) in expected {
        assert_eq!(
            handle_key(&state, InputKey::Char(key)),
            Some(Message::SelectSection(section))
        );
    }
    assert_eq!(handle_key(&state, InputKey::Char('5')), None);
}

#[test]
fn test_tab_cycles_sections() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.nav.section, Section::Noticias);

    run(&mut state, Message::Key(InputKey::BackTab));
    run(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.nav.section, Section::Admin);
}

#[test]
fn test_section_switch_closes_detail_and_resets_cursors() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    run(&mut state, Message::SelectNext);
    run(&mut state, Message::OpenNewsDetail { id: 2 });
    run(&mut state, Message::DetailScrollDown);
    assert!(state.nav.in_detail());

    run(&mut state, Message::SelectSection(Section::Noticias));

    assert_eq!(state.nav.selected_news, None);
    assert_eq!(state.list_selected, 0);
    assert_eq!(state.detail_scroll.offset, 0);
}

// ─────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_then_switch_section_keeps_query() {
    let mut state = AppState::new();
    type_text(&mut state, "manu");

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(list_titles(&state), vec!["Manutenção Programada"]);

    run(&mut state, Message::Key(InputKey::Char('3')));

    assert_eq!(state.nav.query, "manu");
    assert_eq!(list_titles(&state), vec!["Manual do Usuário"]);
}

#[test]
fn test_search_backspace_and_clear() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Char('/')));
    for c in "abc".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.nav.query, "ab");

    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert_eq!(state.nav.query, "");
    assert_eq!(state.ui_mode, UiMode::SearchInput);
}

#[test]
fn test_escape_leaves_search_keeping_query() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Char('/')));
    run(&mut state, Message::Key(InputKey::Char('x')));
    run(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.nav.query, "x");
}

#[test]
fn test_narrowing_query_clamps_selection() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectLast);
    assert_eq!(state.list_selected, 1);

    type_text(&mut state, "manu");
    assert_eq!(state.list_selected, 0);
}

// ─────────────────────────────────────────────────────────
// Card List
// ─────────────────────────────────────────────────────────

#[test]
fn test_selection_stays_in_bounds() {
    let mut state = AppState::new();
    for _ in 0..5 {
        run(&mut state, Message::Key(InputKey::Down));
    }
    assert_eq!(state.list_selected, 1);

    for _ in 0..5 {
        run(&mut state, Message::Key(InputKey::Char('k')));
    }
    assert_eq!(state.list_selected, 0);
}

#[test]
fn test_enter_on_news_card_opens_detail() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    run(&mut state, Message::SelectNext);
    let actions = run(&mut state, Message::Key(InputKey::Enter));

    assert!(actions.is_empty());
    assert_eq!(state.nav.selected_news, Some(2));
    match state.screen() {
        Screen::NewsDetail(detail) => assert_eq!(detail.record.title, "Prêmio de Inovação"),
        other => panic!("expected detail, got {}", other.kind()),
    }
}

#[test]
fn test_enter_on_document_card_requests_open_url() {
    let mut state = AppState::new();
    state.settings.links.browser = "firefox".to_string();
    run(&mut state, Message::SelectSection(Section::Documentos));
    run(&mut state, Message::SelectNext);

    let actions = run(&mut state, Message::ActivateSelected);

    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl {
            url: "https://example.com/privacy.pdf".to_string(),
            browser: "firefox".to_string(),
        }]
    );
}

#[test]
fn test_enter_on_announcement_does_nothing() {
    let mut state = AppState::new();
    let before = state.nav.clone();
    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert!(actions.is_empty());
    assert_eq!(state.nav, before);
}

#[test]
fn test_enter_with_no_results_does_nothing() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    type_text(&mut state, "zzz");
    let actions = run(&mut state, Message::ActivateSelected);
    assert!(actions.is_empty());
    assert_eq!(state.nav.selected_news, None);
}

// ─────────────────────────────────────────────────────────
// News Detail
// ─────────────────────────────────────────────────────────

#[test]
fn test_detail_back_keys() {
    for key in [InputKey::Esc, InputKey::Backspace, InputKey::Char('b')] {
        let mut state = AppState::new();
        run(&mut state, Message::SelectSection(Section::Noticias));
        run(&mut state, Message::OpenNewsDetail { id: 1 });

        run(&mut state, Message::Key(key));

        assert_eq!(state.nav.section, Section::Noticias);
        assert_eq!(state.nav.selected_news, None, "key {:?}", key);
    }
}

#[test]
fn test_detail_scrolling() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    run(&mut state, Message::OpenNewsDetail { id: 1 });
    // Sizes the renderer would report
    state.detail_scroll.update_content_size(30, 10);

    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.detail_scroll.offset, 2);

    run(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.detail_scroll.offset, 1);

    run(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.detail_scroll.offset, 0);

    run(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.detail_scroll.offset, 0);
}

#[test]
fn test_detail_scroll_stops_at_end_of_article() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    run(&mut state, Message::OpenNewsDetail { id: 1 });
    state.detail_scroll.update_content_size(30, 10);

    for _ in 0..500 {
        run(&mut state, Message::Key(InputKey::Down));
    }
    assert_eq!(state.detail_scroll.offset, 20);

    run(&mut state, Message::Key(InputKey::Home));
    run(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.detail_scroll.offset, 20);
}

#[test]
fn test_detail_paging_keys() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Noticias));
    run(&mut state, Message::OpenNewsDetail { id: 1 });
    state.detail_scroll.update_content_size(30, 10);

    run(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.detail_scroll.offset, 8);
    run(&mut state, Message::Key(InputKey::PageUp));
    assert_eq!(state.detail_scroll.offset, 0);
}

#[test]
fn test_list_paging_keys_jump_to_ends() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.list_selected, 1);
    run(&mut state, Message::Key(InputKey::PageUp));
    assert_eq!(state.list_selected, 0);
}

#[test]
fn test_open_news_detail_outside_news_is_ignored() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenNewsDetail { id: 1 });
    assert_eq!(state.nav.selected_news, None);
    assert_eq!(state.screen().kind(), "list");
}

// ─────────────────────────────────────────────────────────
// Admin Panel
// ─────────────────────────────────────────────────────────

fn admin_state() -> AppState {
    let mut state = AppState::new();
    run(&mut state, Message::SelectSection(Section::Admin));
    state
}

#[test]
fn test_admin_delete_flow_cancel() {
    let mut state = admin_state();
    let counts_before: Vec<_> = Category::ALL.iter().map(|c| state.content.count(*c)).collect();

    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Char('d')));

    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert_eq!(
        state.nav.pending_delete,
        Some(RecordRef::new(Category::Noticias, 1))
    );
    match state.screen() {
        Screen::Admin(admin) => {
            let confirm = admin.confirm.expect("overlay open");
            assert_eq!(confirm.title, "Expansão das Operações");
        }
        other => panic!("expected admin, got {}", other.kind()),
    }

    run(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.nav.pending_delete, None);
    let counts_after: Vec<_> = Category::ALL.iter().map(|c| state.content.count(*c)).collect();
    assert_eq!(counts_before, counts_after);
}

#[test]
fn test_admin_delete_flow_confirm_keeps_record() {
    let mut state = admin_state();
    run(&mut state, Message::Key(InputKey::Delete));
    run(&mut state, Message::Key(InputKey::Char('y')));

    assert_eq!(state.nav.pending_delete, None);
    assert!(state
        .content
        .get(RecordRef::new(Category::Comunicados, 1))
        .is_some());
    assert_eq!(state.content.count(Category::Comunicados), 2);
}

#[test]
fn test_delete_targets_are_unambiguous_across_categories() {
    // Every category has a record with id 1; only the selected one is targeted.
    let mut state = admin_state();
    run(&mut state, Message::RequestDelete);
    assert_eq!(
        state.nav.pending_delete,
        Some(RecordRef::new(Category::Comunicados, 1))
    );
}

#[test]
fn test_confirm_dialog_swallows_other_keys() {
    let mut state = admin_state();
    run(&mut state, Message::RequestDelete);

    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
    assert_eq!(handle_key(&state, InputKey::Tab), None);
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ConfirmDelete)
    );
}

#[test]
fn test_request_delete_outside_admin_is_ignored() {
    let mut state = AppState::new();
    run(&mut state, Message::RequestDelete);
    assert_eq!(state.nav.pending_delete, None);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_delete_of_missing_record_leaves_keys_working() {
    let mut state = admin_state();
    state.apply(NavEvent::RequestDelete(RecordRef::new(Category::Noticias, 99)));

    assert_eq!(state.ui_mode, UiMode::Normal);
    let Screen::Admin(admin) = state.screen() else {
        panic!("expected admin");
    };
    assert!(admin.confirm.is_none());

    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::SelectSection(Section::Comunicados))
    );
}

#[test]
fn test_admin_selection_bounded_by_recent_activity() {
    let mut state = admin_state();
    for _ in 0..10 {
        run(&mut state, Message::AdminNext);
    }
    assert_eq!(state.admin_selected, 4);
}

#[test]
fn test_admin_category_focus_wraps() {
    let mut state = admin_state();
    run(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.admin_category, Category::Documentos);

    run(&mut state, Message::Key(InputKey::Right));
    run(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.admin_category, Category::Noticias);
}

#[test]
fn test_add_stub_sets_notice_without_mutation() {
    let mut state = admin_state();
    run(&mut state, Message::Key(InputKey::Right));
    run(&mut state, Message::Key(InputKey::Char('a')));

    let notice = state.notice.clone().expect("notice");
    insta::assert_snapshot!(notice.text, @"Adicionar nova (Notícias): indisponível nesta versão");
    assert_eq!(state.content.count(Category::Noticias), 2);
}

#[test]
fn test_view_stubs_set_notices() {
    let mut state = admin_state();
    run(&mut state, Message::Key(InputKey::Char('v')));
    let notice = state.notice.clone().expect("notice");
    assert!(notice.text.contains("Manutenção Programada"));

    run(&mut state, Message::Key(InputKey::Char('V')));
    let notice = state.notice.clone().expect("notice");
    assert!(notice.text.starts_with("Ver tudo"));
}

// ─────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────

#[test]
fn test_link_failure_sets_notice_that_expires() {
    let mut state = AppState::new();
    state.settings.ui.notice_ticks = 3;
    run(
        &mut state,
        Message::LinkOpenFailed {
            reason: "no browser".to_string(),
        },
    );
    assert!(state.notice.is_some());

    for _ in 0..3 {
        run(&mut state, Message::Tick);
    }
    assert!(state.notice.is_none());
}
