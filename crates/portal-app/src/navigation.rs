//! Navigation state and its pure reducer
//!
//! [`Navigation`] is the single snapshot of what the portal shows: the active
//! section, the news record open in detail view, the search query and the
//! record awaiting delete confirmation. [`reduce`] maps a snapshot and a
//! [`NavEvent`] to the next snapshot without side effects.
//!
//! Illegal transitions (opening a news detail outside the news section,
//! requesting a delete outside the admin section) return the snapshot
//! unchanged.

use portal_core::{RecordId, RecordRef, Section};
use serde::Serialize;
use tracing::debug;

/// Immutable navigation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Navigation {
    /// Active section, `comunicados` initially
    pub section: Section,
    /// News record open in detail view; only meaningful in `noticias`
    pub selected_news: Option<RecordId>,
    /// Live search query, kept verbatim across section switches
    pub query: String,
    /// Record whose delete confirmation overlay is open (admin only)
    pub pending_delete: Option<RecordRef>,
}

impl Navigation {
    /// Snapshot starting in `section` with an initial `query`.
    pub fn new(section: Section, query: impl Into<String>) -> Self {
        Self {
            section,
            query: query.into(),
            ..Self::default()
        }
    }

    /// Whether the detail view is showing.
    pub fn in_detail(&self) -> bool {
        self.section == Section::Noticias && self.selected_news.is_some()
    }
}

/// Navigation transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Switch section; always closes the detail view and any overlay
    SelectSection(Section),
    /// Open a news record in detail view (news section only)
    OpenNewsDetail(RecordId),
    /// Return from the detail view to the list
    CloseNewsDetail,
    /// Replace the search query verbatim
    SetQuery(String),
    /// Open the delete confirmation overlay (admin section only)
    RequestDelete(RecordRef),
    /// Acknowledge the overlay; the content store is never modified
    ConfirmDelete,
    /// Dismiss the overlay
    CancelDelete,
}

/// Apply `event` to `state`, returning the next snapshot.
#[must_use]
pub fn reduce(state: &Navigation, event: NavEvent) -> Navigation {
    let mut next = state.clone();

    match event {
        NavEvent::SelectSection(section) => {
            next.section = section;
            next.selected_news = None;
            next.pending_delete = None;
        }

        NavEvent::OpenNewsDetail(id) => {
            if state.section == Section::Noticias {
                next.selected_news = Some(id);
            } else {
                debug!(
                    "Ignoring news detail {} outside news section ({})",
                    id, state.section
                );
            }
        }

        NavEvent::CloseNewsDetail => {
            next.selected_news = None;
        }

        NavEvent::SetQuery(query) => {
            next.query = query;
        }

        NavEvent::RequestDelete(target) => {
            if state.section == Section::Admin {
                next.pending_delete = Some(target);
            } else {
                debug!("Ignoring delete request outside admin ({})", state.section);
            }
        }

        NavEvent::ConfirmDelete | NavEvent::CancelDelete => {
            next.pending_delete = None;
        }
    }

    next
}
