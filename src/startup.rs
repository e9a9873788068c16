//! Initial application state from settings and command-line overrides

use portal_app::config::Settings;
use portal_app::message::Message;
use portal_app::process::process_message;
use portal_app::state::AppState;
use portal_core::{RecordId, Section};
use tracing::debug;

/// Command-line overrides applied on top of the loaded settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    pub section: Option<Section>,
    pub query: Option<String>,
    pub news: Option<RecordId>,
}

/// Build the starting state.
///
/// Overrides go through the regular update path, so `news` only opens a
/// detail view when the resulting section is `noticias`.
pub fn initial_state(settings: Settings, options: &StartupOptions) -> AppState {
    let mut state = AppState::with_settings(settings);

    if let Some(section) = options.section {
        process_message(&mut state, Message::SelectSection(section));
    }
    if let Some(query) = &options.query {
        process_message(
            &mut state,
            Message::SearchInput {
                text: query.clone(),
            },
        );
    }
    if let Some(id) = options.news {
        process_message(&mut state, Message::OpenNewsDetail { id });
    }

    debug!(
        "Initial state: section={} query={:?} news={:?}",
        state.nav.section, state.nav.query, state.nav.selected_news
    );
    state
}
