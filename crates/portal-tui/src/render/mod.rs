//! Main render/view function (View in TEA pattern)


use portal_app::screen::{self, Screen};
use portal_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::{Block, ListState};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Only the detail view's scroll sizes are written back to `state`; list
/// scroll offsets live in a throwaway `ListState` rebuilt every frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let show_images = state.settings.ui.show_images;

    frame.render_widget(widgets::MainHeader::new(state.nav.section, icons), areas.header);
    frame.render_widget(
        widgets::SearchInput::new(&state.nav.query, icons)
            .active(state.ui_mode == UiMode::SearchInput),
        areas.search,
    );

    // Borrow fields separately so the detail scroll stays mutable
    let screen = screen::select(
        &state.nav,
        &state.content,
        state.settings.ui.recent_activity_limit,
    );
    match &screen {
        Screen::List(list) => {
            let mut list_state = ListState::default().with_selected(Some(state.list_selected));
            frame.render_stateful_widget(
                widgets::RecordList::new(list, &state.nav.query, icons).show_images(show_images),
                areas.body,
                &mut list_state,
            );
        }
        Screen::NewsDetail(detail) => {
            frame.render_stateful_widget(
                widgets::NewsDetailView::new(detail, icons).show_images(show_images),
                areas.body,
                &mut state.detail_scroll,
            );
        }
        Screen::Admin(admin) => {
            frame.render_widget(
                widgets::AdminPanel::new(admin, icons)
                    .focused_category(state.admin_category)
                    .selected(state.admin_selected),
                areas.body,
            );
        }
    }

    frame.render_widget(widgets::NavBar::new(state.nav.section, icons), areas.nav);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Overlay last so it covers everything
    if let Screen::Admin(admin) = &screen {
        if let Some(confirm) = &admin.confirm {
            frame.render_widget(widgets::ConfirmDialog::new(confirm), area);
        }
    }
}
