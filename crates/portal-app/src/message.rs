//! Message types for the application (TEA pattern)

use portal_core::{Category, RecordId, Section};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Section Navigation
    // ─────────────────────────────────────────────────────────
    /// Jump to a section (bottom navigation bar)
    SelectSection(Section),
    /// Cycle to the next section
    NextSection,
    /// Cycle to the previous section
    PreviousSection,

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// Focus the search box
    StartSearch,
    /// Leave the search box, keeping the query
    StopSearch,
    /// Replace the search query
    SearchInput { text: String },

    // ─────────────────────────────────────────────────────────
    // Card List
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Trigger the selected card's affordance
    ActivateSelected,

    // ─────────────────────────────────────────────────────────
    // News Detail
    // ─────────────────────────────────────────────────────────
    OpenNewsDetail { id: RecordId },
    /// "Voltar"
    CloseNewsDetail,
    DetailScrollUp,
    DetailScrollDown,
    DetailScrollTop,
    DetailScrollBottom,
    DetailPageUp,
    DetailPageDown,

    // ─────────────────────────────────────────────────────────
    // Admin Panel
    // ─────────────────────────────────────────────────────────
    /// Move the "Atividade Recente" selection down
    AdminNext,
    /// Move the "Atividade Recente" selection up
    AdminPrevious,
    /// Focus the next "Gerenciar Conteúdo" category card
    AdminFocusNextCategory,
    /// Focus the previous category card
    AdminFocusPreviousCategory,
    /// "Adicionar novo/nova" (no-op)
    AddRecord(Category),
    /// Eye button on the selected recent entry (no-op)
    ViewRecord,
    /// "Ver tudo" (no-op)
    ViewAll,
    /// Trash button on the selected recent entry
    RequestDelete,
    /// "Excluir"
    ConfirmDelete,
    /// "Cancelar"
    CancelDelete,

    // ─────────────────────────────────────────────────────────
    // Links
    // ─────────────────────────────────────────────────────────
    /// Opening a document link failed
    LinkOpenFailed { reason: String },
}
