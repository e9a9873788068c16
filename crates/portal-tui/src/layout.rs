//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Title block: top border + title + subtitle + bottom border
const HEADER_HEIGHT: u16 = 4;
/// Search box: bordered single line
const SEARCH_HEIGHT: u16 = 3;
/// Navigation bar: bordered single line
const NAV_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// "Portal de Comunicação" title and subtitle
    pub header: Rect,

    /// "Pesquisar..." box
    pub search: Rect,

    /// Card list, news detail or admin panel
    pub body: Rect,

    /// Section navigation bar
    pub nav: Rect,

    /// Notice or key hints
    pub status: Rect,
}

/// Split the terminal into the portal's fixed regions
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        body: chunks[2],
        nav: chunks[3],
        status: chunks[4],
    }
}
