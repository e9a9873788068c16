//! portal-tui - Terminal UI for the content portal
//!
//! This crate provides the ratatui-based terminal interface. It draws the
//! `Screen` computed by portal-app and feeds crossterm key events back into
//! the TEA update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
