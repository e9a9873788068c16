//! Abstract input key event, independent of terminal library.
//!
//! Key handling in this crate is written against `InputKey` so that the
//! application layer never depends on crossterm. The TUI converts its events
//! at the boundary; tests construct keys directly.

/// A key press as seen by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including shifted ones
    Char(char),
    /// Character pressed together with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}
