//! Main TUI runner - entry point and event loop

use portal_app::process::process_message;
use portal_app::state::AppState;
use portal_core::prelude::*;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the TUI until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!(
        "Portal TUI started in section {} (query {:?})",
        state.nav.section, state.nav.query
    );

    let result = run_loop(&mut term, &mut state);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    match &result {
        Err(e) if e.is_fatal() => error!("TUI loop ended with error: {}", e),
        Err(e) => warn!("TUI loop ended with error: {}", e),
        Ok(()) => info!("Portal TUI exited"),
    }
    result.and(restored)
}

/// Draw, wait for one event, update; repeat until quitting
fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}
