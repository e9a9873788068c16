//! Headless mode - JSON screen output instead of the TUI
//!
//! Prints the screen the TUI would draw as a single NDJSON event on stdout,
//! so scripts can inspect navigation results without parsing ANSI output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"screen","section":"documentos","query":"manu","screen":{"screen":"list",...},"timestamp":1710500000000}
//! ```

use std::io::{self, Write};

use chrono::Utc;
use portal_app::screen::Screen;
use portal_app::state::AppState;
use portal_core::prelude::*;
use portal_core::Section;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// The computed screen for the current navigation state
    Screen {
        section: Section,
        query: &'a str,
        screen: Screen<'a>,
        timestamp: i64,
    },
}

impl<'a> HeadlessEvent<'a> {
    pub fn screen(state: &'a AppState) -> Self {
        Self::Screen {
            section: state.nav.section,
            query: &state.nav.query,
            screen: state.screen(),
            timestamp: Self::now(),
        }
    }

    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Print the current screen and exit
pub fn run_headless(state: &AppState) -> Result<()> {
    info!(
        "Headless run: section={} query={:?}",
        state.nav.section, state.nav.query
    );
    HeadlessEvent::screen(state)
        .emit()
        .context("Failed to write headless event")
}
